//! # 工具函数模块
//!
//! 提供终端输出和告别语守卫。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 子模块: output, farewell

pub mod farewell;
pub mod output;
