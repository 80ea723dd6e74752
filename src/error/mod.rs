mod case_file;
mod input;

pub use case_file::CaseFileError;
pub use input::InputError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    CaseFile(#[from] CaseFileError),
}

pub type Result<T> = std::result::Result<T, Error>;
