use crate::domain::entities::Role;

/// 요구되는 역할 정보
#[derive(Debug, Clone, PartialEq)]
pub enum RequiredRole {
    /// 특정 단일 역할이 필요
    Single(Role),
    /// 여러 역할 중 하나라도 있으면 허용 (OR 조건)
    Any(Vec<Role>),
}

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, role: Role) -> bool {
        match self {
            RequiredRole::Single(required) => *required == role,
            RequiredRole::Any(required) => required.contains(&role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_role_single() {
        let required = RequiredRole::Single(Role::Admin);

        assert!(required.is_satisfied(Role::Admin));
        assert!(!required.is_satisfied(Role::User));
    }

    #[test]
    fn test_required_role_any() {
        let required = RequiredRole::Any(vec![Role::Admin, Role::User]);

        assert!(required.is_satisfied(Role::Admin));
        assert!(required.is_satisfied(Role::User));
        assert!(!RequiredRole::Any(vec![]).is_satisfied(Role::User));
    }
}
