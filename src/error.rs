use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GardenError>;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("Git open error: {0}")]
    Open(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Signature date error: {0}")]
    SignatureDate(#[from] gix::date::parse::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Cannot locate home directory; pass --registry")]
    NoHomeDir,
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for GardenError {
    fn from(err: gix::open::Error) -> Self {
        GardenError::Open(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GardenError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GardenError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GardenError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GardenError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GardenError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GardenError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GardenError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GardenError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GardenError {
    fn from(err: gix::object::commit::Error) -> Self {
        GardenError::Commit(Box::new(err))
    }
}
