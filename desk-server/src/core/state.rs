use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::core::Config;
use crate::db::{Store, seed};
use crate::utils::time;

/// 资源版本管理器
///
/// 使用 DashMap 实现无锁并发的版本号管理。
/// 每种资源类型维护独立的版本号，支持原子递增。
///
/// # 使用场景
///
/// 每个变更接口在成功后递增对应资源的版本号，
/// 客户端通过 `/api/sync/versions` 对比版本号判断缓存是否过期。
#[derive(Debug)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    /// 创建空的版本管理器
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// 递增指定资源的版本号并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定资源的当前版本号
    ///
    /// 如果资源不存在，返回 0
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }

    /// 全部版本号的有序快照
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.versions
            .iter()
            .map(|r| (r.key().clone(), *r.value()))
            .collect()
    }
}

impl Default for ResourceVersions {
    fn default() -> Self {
        Self::new()
    }
}

/// In-flight guard for the full-payment chain.
///
/// Holding the guard marks the reservation as "payment in progress"; the
/// slot frees itself on drop, including on the error path.
pub struct BillingGuard {
    locks: Arc<DashMap<i64, ()>>,
    reservation_id: i64,
}

impl Drop for BillingGuard {
    fn drop(&mut self) {
        self.locks.remove(&self.reservation_id);
    }
}

/// 服务器状态 - 持有所有共享组件的引用
///
/// ServerState 是前台服务的核心数据结构。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | store | 内存存储 |
/// | resource_versions | 资源版本管理 (缓存失效信号) |
/// | billing_locks | 全额支付链在途守卫 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 内存存储
    pub store: Store,
    /// 资源版本管理器
    pub resource_versions: Arc<ResourceVersions>,
    /// 正在执行支付链的预订 ID 集合
    billing_locks: Arc<DashMap<i64, ()>>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, store: Store) -> Self {
        Self {
            config,
            store,
            resource_versions: Arc::new(ResourceVersions::new()),
            billing_locks: Arc::new(DashMap::new()),
        }
    }

    /// 初始化服务器状态
    ///
    /// 开发环境下载入演示数据。
    pub fn initialize(config: &Config) -> Self {
        let store = Store::new();
        if config.is_development() {
            seed::seed_demo_data(&store);
        }
        Self::new(config.clone(), store)
    }

    /// 变更成功后递增资源版本号
    pub fn bump_version(&self, resource: &str) -> u64 {
        let version = self.resource_versions.increment(resource);
        tracing::debug!(resource, version, "Resource version bumped");
        version
    }

    /// 当前业务日 (配置时区的日历日)
    pub fn today(&self) -> NaiveDate {
        time::today_in(self.config.timezone)
    }

    /// 尝试获取某预订的支付链守卫
    ///
    /// 已有链在途时返回 None，调用方应拒绝重复提交。
    pub fn begin_billing(&self, reservation_id: i64) -> Option<BillingGuard> {
        match self.billing_locks.entry(reservation_id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(());
                Some(BillingGuard {
                    locks: self.billing_locks.clone(),
                    reservation_id,
                })
            }
        }
    }
}
