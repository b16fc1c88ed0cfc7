//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 계정 서비스의 모든 서비스/리포지토리 인스턴스를 관리하는 DI 컨테이너입니다.
//! Spring Framework의 ApplicationContext와 BeanFactory 역할을 Rust에서 구현한 것으로,
//! `singleton_macro`의 `#[service]` / `#[repository]` 매크로와 함께 동작합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `ApplicationContext` | `ServiceLocator` | 전역 DI 컨테이너 |
//! | `@Component` | `#[service]` / `#[repository]` | 컴포넌트 자동 등록 |
//! | `@Autowired` | `Arc<T>` 필드 | 자동 의존성 주입 |
//! | `@Lazy` | 기본 동작 | 모든 빈이 지연 초기화 |
//! | `@Scope("singleton")` | 기본 동작 | 모든 컴포넌트가 싱글톤 |
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임 (Component Scanning)
//!    ├─ #[service] 매크로 → ServiceRegistration 생성
//!    ├─ #[repository] 매크로 → RepositoryRegistration 생성
//!    └─ inventory::collect! → 전역 레지스트리에 등록
//!
//! 2. 런타임 초기화 (Infrastructure Beans)
//!    ├─ Database, RedisClient 등 인프라 컴포넌트 직접 등록 (ServiceLocator::set)
//!    └─ ServiceLocator::initialize_all() → 리포지토리 → 서비스 순으로 생성
//!
//! 3. 의존성 주입 (Autowiring)
//!    ├─ Arc<T> 필드 감지 → ServiceLocator::get::<T>() 호출
//!    ├─ 타입 이름으로 등록 정보 검색 ("AccountRepository" → "account")
//!    └─ 생성 후 캐싱 → 이후 동일 타입 요청 시 캐시된 인스턴스 반환
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[repository(name = "account", collection = "users")]
//! pub struct AccountRepository {
//!     db: Arc<Database>,
//! }
//!
//! // main.rs
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::initialize_all().await?;
//!
//! let repo = ServiceLocator::get::<AccountRepository>();
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 서비스 컴포넌트 공통 trait
///
/// `#[service]` 매크로가 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 리포지토리 컴포넌트 공통 trait
///
/// `#[repository]` 매크로가 자동 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보 (`inventory`로 수집)
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보 (`inventory`로 수집)
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

type Constructor = fn() -> Box<dyn Any + Send + Sync>;

static SERVICE_NAME_CACHE: Lazy<HashMap<String, Constructor>> = Lazy::new(|| {
    let cache: HashMap<String, Constructor> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, Constructor>> = Lazy::new(|| {
    let cache: HashMap<String, Constructor> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// "account_service" → "account", "session_repository" → "session"
fn clean_registration_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// "account_service::services::accounts::AccountService" → "AccountService"
fn clean_type_name(type_name: &str) -> &str {
    match type_name.rfind("::") {
        Some(pos) => &type_name[pos + 2..],
        None => type_name,
    }
}

/// 타입 이름으로부터 등록 생성자를 찾습니다.
///
/// 리포지토리 접미사를 먼저 확인합니다. `AccountRepository` 와 같은 이름은
/// "Service"를 포함하지 않지만, 반대 방향의 충돌을 막기 위해 순서를 고정합니다.
fn resolve_constructor(type_name: &str) -> Option<Constructor> {
    let clean = clean_type_name(type_name);

    if let Some(entity) = clean.strip_suffix("Repository") {
        return REPOSITORY_NAME_CACHE.get(&entity.to_lowercase()).copied();
    }

    if let Some(entity) = clean.strip_suffix("Service") {
        return SERVICE_NAME_CACHE.get(&entity.to_lowercase()).copied();
    }

    None
}

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn instances(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        self.instances.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn instances_mut(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        self.instances.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn initializing_mut(&self) -> RwLockWriteGuard<'_, HashSet<TypeId>> {
        self.initializing.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cached<T: 'static + Send + Sync>(&self) -> Option<Arc<T>> {
        self.instances()
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 타입 `T`의 싱글톤 인스턴스를 반환합니다.
    ///
    /// 처음 요청된 타입은 등록된 생성자로 만들어 캐시에 저장합니다.
    /// 생성자 호출 동안에는 락을 잡지 않으므로 생성자 내부에서 다른
    /// 의존성을 `get` 으로 요청해도 교착 상태가 생기지 않습니다.
    ///
    /// # Panics
    ///
    /// * 순환 의존성이 감지된 경우
    /// * 등록되지 않은 타입을 요청한 경우
    ///
    /// 두 경우 모두 애플리케이션 구성 오류이므로 기동 시점에 실패합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.cached::<T>() {
            return instance;
        }

        if !LOCATOR.initializing_mut().insert(type_id) {
            log::error!("❌ Circular dependency detected for type: {}", type_name);
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        let created = resolve_constructor(type_name)
            .map(|constructor| constructor())
            .and_then(|boxed| boxed.downcast::<Arc<T>>().ok())
            .map(|arc_instance| *arc_instance);

        LOCATOR.initializing_mut().remove(&type_id);

        let Some(instance) = created else {
            panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            );
        };

        let mut instances = LOCATOR.instances_mut();
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().unwrap_or(instance)
    }

    /// 인프라 컴포넌트(Database, RedisClient 등)를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", clean_type_name(type_name));

        LOCATOR
            .instances_mut()
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 생성합니다.
    ///
    /// 리포지토리를 먼저 만든 뒤 서비스를 생성합니다. 서비스의 `Arc<T>` 필드는
    /// 이미 만들어진 리포지토리 싱글톤을 그대로 주입받습니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ManuallyRegistered {
        value: u32,
    }

    #[test]
    fn test_clean_registration_name() {
        assert_eq!(clean_registration_name("account_service"), "account");
        assert_eq!(clean_registration_name("session_repository"), "session");
        assert_eq!(clean_registration_name("plain"), "plain");
    }

    #[test]
    fn test_clean_type_name() {
        assert_eq!(
            clean_type_name("account_service::services::accounts::account_service::AccountService"),
            "AccountService"
        );
        assert_eq!(clean_type_name("Database"), "Database");
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        let instance = Arc::new(ManuallyRegistered { value: 7 });
        ServiceLocator::set(instance.clone());

        let resolved = ServiceLocator::get::<ManuallyRegistered>();

        assert_eq!(resolved.value, 7);
        assert!(Arc::ptr_eq(&instance, &resolved));
    }

    #[test]
    fn test_token_service_resolves_through_registry() {
        let first = ServiceLocator::get::<crate::services::auth::TokenService>();
        let second = ServiceLocator::get::<crate::services::auth::TokenService>();

        assert!(Arc::ptr_eq(&first, &second));
    }
}
