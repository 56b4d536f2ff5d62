//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 시 설정 요약을 보기 좋게 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 49칸 안에서 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 USER API SERVICE                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 들여쓰기된 트리 항목 한 줄을 출력합니다
///
/// ```text
///    ├─ Store: memory
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("{}", sub_task_line(name, status));
}

fn sub_task_line(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 기동 설정 요약을 출력합니다
///
/// # Arguments
///
/// * `bind_address` - 바인딩 주소
/// * `store_backend` - 사용 중인 저장소 이름
/// * `timeout_secs` - 저장소 호출 타임아웃(초)
/// * `workers` - 워커 스레드 수
pub fn print_startup_summary(bind_address: &str, store_backend: &str, timeout_secs: u64, workers: usize) {
    println!();
    print_boxed_title("USER API SERVICE");
    print_sub_task("Bind", bind_address);
    print_sub_task("Store", store_backend);
    print_sub_task("Request timeout", &format!("{}s", timeout_secs));
    print_sub_task("Workers", &workers.to_string());
    println!();
}
