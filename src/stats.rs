//! 통계 및 유틸리티 모듈
//!
//! 처리 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// 처리 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 대상 파일 수
    pub total_files: usize,
    /// 이름 변경(또는 변경 예정) 수
    pub renamed_count: AtomicUsize,
    /// 이름 변동 없어 건너뛴 수
    pub skipped_count: AtomicUsize,
    /// 에러 발생 수
    pub error_count: AtomicUsize,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 이름 변경 카운트 증가
    pub fn increment_renamed(&self) {
        self.renamed_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 건너뜀 카운트 증가
    pub fn increment_skipped(&self) {
        self.skipped_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 에러 카운트 증가
    pub fn increment_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 이름 변경 수 반환
    pub fn get_renamed_count(&self) -> usize {
        self.renamed_count.load(Ordering::Relaxed)
    }

    /// 건너뜀 수 반환
    pub fn get_skipped_count(&self) -> usize {
        self.skipped_count.load(Ordering::Relaxed)
    }

    /// 에러 수 반환
    pub fn get_error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 처리 통계 요약 출력
    ///
    /// 실패한 파일은 별도 항목으로 집계하지 않습니다. 경고 라인과
    /// 에러 로그 파일로만 드러납니다.
    pub fn print_summary(&self, dry_run: bool) {
        let renamed = self.get_renamed_count();
        let skipped = self.get_skipped_count();
        let elapsed = self.elapsed();

        let renamed_label = if dry_run {
            "변경 예정:   "
        } else {
            "이름 변경:   "
        };

        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 처리 결과".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 대상 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} {} {}",
            "✏️".bright_green(),
            renamed_label,
            renamed.to_string().green()
        );
        println!(
            "  {} 건너뜀:       {}",
            "⏭️".bright_yellow(),
            skipped.to_string().yellow()
        );
        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(elapsed)
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}시간 {}분", hours, mins)
    } else if secs >= 60 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        format!("{}분 {}초", mins, remaining_secs)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
