//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("图中没有任何顶点")]
    EmptyGraph,

    #[error("顶点未注册: {0}")]
    UnknownNode(String),

    #[error("顶点已存在: {0}")]
    DuplicateNode(String),

    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::IoError(e.into())
        } else if e.is_syntax() || e.is_eof() || e.is_data() {
            Error::ParseError(e.to_string())
        } else {
            Error::SerializationError(e.to_string())
        }
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}
