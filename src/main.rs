//! frename - FILE BATCH RENAMER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use frename::{
    cli::Args,
    error::FRenameError,
    pattern::PatternMatcher,
    renamer::{rename_file, RenameOptions},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // 인자 조합 검사 (파일 시스템 접근 전)
    validate_args(&args)?;

    // 대상 폴더 확인
    validate_input(&args)?;

    // 패턴 매처 초기화
    let pattern_matcher = PatternMatcher::new(args.pattern.as_deref())?;

    // 헤더 출력
    print_header(&args);

    // 대상 파일 수집
    let (files, walk_errors) = collect_files(&args, &pattern_matcher)?;

    if files.is_empty() && walk_errors.is_empty() {
        println!("{}", "⚠️ 이름을 변경할 파일이 없습니다.".yellow());
        return Ok(());
    }

    println!(
        "  {} 대상 파일 수: {}",
        "📋".bright_white(),
        files.len().to_string().bright_green()
    );

    // 통계 초기화
    let stats = Statistics::new(files.len());

    // 수집 단계에서 읽지 못한 항목은 경고만 남기고 계속 진행
    let mut errors = walk_errors;
    for (path, error) in &errors {
        stats.increment_error();
        eprintln!(
            "{} {:?}: {}",
            "⚠️".bright_yellow(),
            path.file_name().unwrap_or_default(),
            error
        );
    }

    let options = RenameOptions::new()
        .with_prefix(args.prefix.clone())
        .with_suffix(args.suffix.clone())
        .with_dry_run(args.dry_run);

    // 순차 이름 변경 루프
    run_batch(&args, files, &options, &stats, &mut errors);

    // 에러 로그 작성
    if let Some(ref log_path) = args.log {
        write_error_log(log_path, &errors)?;
    }

    // 통계 출력
    stats.print_summary(args.dry_run);

    if stats.get_error_count() > 0 {
        eprintln!(
            "\n{} {} 개 파일 처리 중 오류가 발생했습니다. (위 경고 참조)",
            "⚠️".bright_yellow(),
            stats.get_error_count().to_string().red()
        );
    }

    Ok(())
}

/// 인자 조합 유효성 검사
///
/// 접두사/접미사가 모두 비어 있고 dry-run도 아니면 할 일이 없으므로
/// 파일 시스템에 접근하기 전에 거부합니다.
fn validate_args(args: &Args) -> Result<()> {
    if !args.has_transform() && !args.dry_run {
        eprintln!("사용법: frename -d <폴더> [-p <접두사>] [-s <접미사>] [--dry-run]");
        return Err(FRenameError::NothingToDo.into());
    }
    Ok(())
}

/// 대상 폴더 유효성 검사
fn validate_input(args: &Args) -> Result<()> {
    if !args.directory.exists() {
        return Err(FRenameError::InputNotFound {
            path: args.directory.clone(),
        }
        .into());
    }

    if !args.directory.is_dir() {
        return Err(FRenameError::NotADirectory {
            path: args.directory.clone(),
        }
        .into());
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " ✏️ FILE BATCH RENAMER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 대상 폴더: {:?}", "📂".bright_cyan(), args.directory);

    if !args.prefix.is_empty() {
        println!("  {} 접두사: \"{}\"", "🔤".bright_green(), args.prefix);
    }

    if !args.suffix.is_empty() {
        println!("  {} 접미사: \"{}\"", "🔡".bright_green(), args.suffix);
    }

    if let Some(ref pattern) = args.pattern {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), pattern);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변경 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 이름 변경 대상 파일 수집
///
/// 폴더 바로 아래의 일반 파일만 대상입니다. 폴더 자체를 읽지 못하면
/// 치명적 에러이고, 개별 항목을 읽지 못하면 경고로 수집해 계속 진행합니다.
fn collect_files(
    args: &Args,
    pattern_matcher: &PatternMatcher,
) -> Result<(Vec<PathBuf>, Vec<(PathBuf, String)>)> {
    let mut files = Vec::new();
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for entry in WalkDir::new(&args.directory).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                // 폴더 자체를 읽지 못한 경우만 전체 중단
                if e.depth() == 0 || e.path() == Some(args.directory.as_path()) {
                    anyhow::bail!("폴더를 읽을 수 없습니다 {:?}: {}", args.directory, e);
                }
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| args.directory.clone());
                errors.push((path, e.to_string()));
                continue;
            }
        };

        // 폴더, 심볼릭 링크 등은 제외
        if !entry.file_type().is_file() {
            continue;
        }

        // UTF-8이 아닌 이름은 후보로 남겨 루프에서 파일별 에러로 처리
        if !entry
            .path()
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| pattern_matcher.matches(s))
            .unwrap_or(true)
        {
            continue;
        }

        files.push(entry.path().to_path_buf());
    }

    Ok((files, errors))
}

/// 순차 이름 변경 루프 실행
///
/// 파일 하나의 실패는 경고로만 보고하고 나머지 파일을 계속 처리합니다.
fn run_batch(
    args: &Args,
    files: Vec<PathBuf>,
    options: &RenameOptions,
    stats: &Statistics,
    errors: &mut Vec<(PathBuf, String)>,
) {
    let heading = if args.dry_run {
        "🧪 변경 내용 미리보기..."
    } else {
        "✏️ 이름 변경 중..."
    };
    println!("\n{}", heading.bright_cyan());

    for path in files {
        let file_name = path.file_name().unwrap_or_default().to_os_string();
        let result = rename_file(path, options);

        if let Some(ref new_name) = result.new_name {
            stats.increment_renamed();
            if args.dry_run {
                println!(
                    "  {} {:?} -> {:?}",
                    "[드라이런]".bright_yellow(),
                    file_name,
                    new_name
                );
            } else {
                println!("  {} {:?} -> {:?}", "✓".green(), file_name, new_name);
            }
        } else if result.is_skipped {
            stats.increment_skipped();
            if args.verbose {
                println!("  {} {:?} (이름 변동 없음)", "⏭️".bright_yellow(), file_name);
            }
        } else if let Some(error) = result.error {
            stats.increment_error();
            eprintln!("{} {:?}: {}", "⚠️".bright_yellow(), file_name, error);
            errors.push((result.path, error));
        }
    }
}

/// 에러 로그 파일 작성
fn write_error_log(log_path: &PathBuf, errors: &[(PathBuf, String)]) -> Result<()> {
    let mut log_file = File::create(log_path)?;

    writeln!(log_file, "frename 에러 로그")?;
    writeln!(log_file, "생성 시간: {}", unix_now())?;
    writeln!(log_file, "총 에러 수: {}", errors.len())?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for (path, error) in errors {
        writeln!(log_file, "\n파일: {:?}", path)?;
        writeln!(log_file, "에러: {}", error)?;
    }

    println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}

/// 현재 시간 문자열 반환
fn unix_now() -> String {
    use std::time::SystemTime;
    let now = SystemTime::now();
    let duration = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", duration.as_secs())
}
