//! Diesel schema for task board persistence.

diesel::table! {
    /// Task documents shown on the board.
    board_tasks (id) {
        /// Store-assigned document key.
        id -> Uuid,
        /// Display text.
        text -> Text,
        /// Stage label.
        #[max_length = 32]
        status -> Varchar,
        /// Insertion sequence used for stable listing order.
        seq -> Int8,
    }
}
