mod history;

pub use history::CommandHistory;
