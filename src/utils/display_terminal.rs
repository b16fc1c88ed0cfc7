//! 기동 로그 포맷팅 유틸리티
//!
//! `ServiceLocator::initialize_all` 이 리포지토리/서비스 생성 과정을 보여줄 때 사용합니다.
//! 줄 단위 문자열은 `format_*` 함수가 만들고, `print_*` 함수는 그것을 `info` 레벨로 기록합니다.

/// 박스 내부 너비 (문자 수)
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싼 제목 세 줄
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║           🔄 INITIALIZING SERVICE REGISTRY        ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> [String; 3] {
    let border = "═".repeat(BOX_WIDTH);

    [
        format!("╔{}╗", border),
        format!("║{:^width$}║", title, width = BOX_WIDTH),
        format!("╚{}╝", border),
    ]
}

/// 등록 완료 요약
pub fn format_summary(repositories: usize, services: usize) -> Vec<String> {
    let mut lines: Vec<String> = format_boxed_title("🎉 SERVICE REGISTRY INITIALIZED").into();
    lines.push(format!("   📦 Repositories: {}", repositories));
    lines.push(format!("   🔧 Services: {}", services));
    lines.push(format!("   🚀 Total Components: {}", repositories + services));
    lines
}

pub fn print_boxed_title(title: &str) {
    for line in format_boxed_title(title) {
        log::info!("{}", line);
    }
}

pub fn print_step_start(step: u8, description: &str) {
    log::info!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    log::info!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 단계 내부 항목 (리포지토리/서비스 하나)
pub fn print_sub_task(name: &str, status: &str) {
    log::info!("   ├─ {}: {}", name, status);
}

pub fn print_final_summary(repositories: usize, services: usize) {
    for line in format_summary(repositories, services) {
        log::info!("{}", line);
    }
}

/// 이름 → 생성자 캐시가 처음 만들어졌을 때
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    log::debug!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_lines_have_equal_width() {
        let [top, middle, bottom] = format_boxed_title("READY");

        assert_eq!(top.chars().count(), BOX_WIDTH + 2);
        assert_eq!(middle.chars().count(), BOX_WIDTH + 2);
        assert_eq!(bottom.chars().count(), BOX_WIDTH + 2);
        assert!(middle.contains("READY"));
    }

    #[test]
    fn test_summary_counts_components() {
        let lines = format_summary(2, 2);

        assert_eq!(lines.len(), 6);
        assert!(lines[5].ends_with("Total Components: 4"));
    }
}
