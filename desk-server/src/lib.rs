//! Front Desk Server - 酒店前台管理服务
//!
//! # 架构概述
//!
//! 本模块是前台服务的主入口，提供以下核心功能：
//!
//! - **HTTP API** (`api`): RESTful API 接口 (客房/客人/预订/发票/配置)
//! - **领域引擎** (`booking`): 可用性日历、收银支付链、会员积分、
//!   通知派生、客人汇总、住宿报价
//! - **存储** (`db`): 内存存储 (持久化协作方为 mock 后端)
//!
//! # 模块结构
//!
//! ```text
//! desk-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── booking/       # 领域引擎 (纯函数)
//! ├── db/            # 存储层 (内存集合 + 仓库)
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在不是错误
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______                 __     ____            __
   / ____/________  ____  / /_   / __ \___  _____/ /__
  / /_  / ___/ __ \/ __ \/ __/  / / / / _ \/ ___/ //_/
 / __/ / /  / /_/ / / / / /_   / /_/ /  __(__  ) ,<
/_/   /_/   \____/_/ /_/\__/  /_____/\___/____/_/|_|
    "#
    );
}
