//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 参数引用了图中不存在的顶点，或配置取值非法
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 查询要求的边不存在
    #[error("未找到: {0}")]
    NotFound(String),
}

impl Error {
    pub(crate) fn unknown_vertex(id: impl std::fmt::Display) -> Self {
        Error::InvalidArgument(format!("顶点 {} 不存在", id))
    }

    pub(crate) fn missing_edge(a: impl std::fmt::Display, b: impl std::fmt::Display) -> Self {
        Error::NotFound(format!("顶点 {} 与 {} 之间没有边", a, b))
    }
}
