pub mod books;

pub use self::books::model::Book;
