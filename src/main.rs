//! # gradecalc - 分数转字母等级
//!
//! 从标准输入读取一个分数，校验后映射为字母等级并输出结果，
//! 最后总是输出告别语。
//!
//! ## 子命令
//! - `grade` - 交互评分（默认）
//! - `scale` - 打印评分标准
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── models/    (分数与等级模型)
//!   ├── utils/      (输出与告别语守卫)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // 日志只写 stderr；RUST_LOG 未设置时默认 warn
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradecalc=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
