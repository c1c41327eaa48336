//! 이름 변경 처리 모듈
//!
//! 개별 파일의 새 이름 계산과 실제 이름 변경을 담당합니다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FRenameError, Result};

/// 파일별 이름 변경 결과
#[derive(Debug)]
pub struct EntryResult {
    /// 처리한 파일 경로
    pub path: PathBuf,
    /// 변경된(또는 변경될) 새 이름 (성공 시)
    pub new_name: Option<String>,
    /// 에러 메시지 (실패 시)
    pub error: Option<String>,
    /// 이름 변동이 없어 건너뛰었는지 여부
    pub is_skipped: bool,
}

impl EntryResult {
    /// 이름 변경 성공 결과 생성
    pub fn renamed(path: PathBuf, new_name: String) -> Self {
        Self {
            path,
            new_name: Some(new_name),
            error: None,
            is_skipped: false,
        }
    }

    /// 이름 변동 없음(건너뜀) 결과 생성
    pub fn skipped(path: PathBuf) -> Self {
        Self {
            path,
            new_name: None,
            error: None,
            is_skipped: true,
        }
    }

    /// 실패 결과 생성
    pub fn failure(path: PathBuf, error: String) -> Self {
        Self {
            path,
            new_name: None,
            error: Some(error),
            is_skipped: false,
        }
    }
}

/// 이름 변경 옵션
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// 파일 이름 앞에 붙일 접두사
    pub prefix: String,
    /// 확장자 앞에 붙일 접미사
    pub suffix: String,
    /// 실제 변경 없이 계산만 수행
    pub dry_run: bool,
}

impl RenameOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 접두사 설정
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 접미사 설정
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// 드라이런 모드 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// 파일 이름을 기본 이름과 확장자로 분리
///
/// 가장 오른쪽 점을 기준으로 나눕니다. 점이 없거나 점이 첫 글자인
/// 경우(숨김 파일)에는 전체 이름이 기본 이름이고 확장자는 빈 문자열입니다.
///
/// # Examples
/// ```
/// use frename::renamer::split_file_name;
///
/// assert_eq!(split_file_name("report.txt"), ("report", ".txt"));
/// assert_eq!(split_file_name("archive"), ("archive", ""));
/// assert_eq!(split_file_name(".gitignore"), (".gitignore", ""));
/// ```
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// 접두사 + 기본 이름 + 접미사 + 확장자 순서로 새 이름 계산
pub fn new_file_name(name: &str, options: &RenameOptions) -> String {
    let (base, extension) = split_file_name(name);
    format!("{}{}{}{}", options.prefix, base, options.suffix, extension)
}

/// 단일 파일 이름 변경 처리
///
/// # Arguments
/// * `path` - 이름을 변경할 파일 경로
/// * `options` - 이름 변경 옵션
///
/// # Returns
/// 처리 결과를 담은 `EntryResult`. 실패해도 에러를 결과에 담아
/// 반환할 뿐 호출자의 배치를 중단시키지 않습니다.
pub fn rename_file(path: PathBuf, options: &RenameOptions) -> EntryResult {
    match rename_file_internal(&path, options) {
        Ok(Some(new_name)) => EntryResult::renamed(path, new_name),
        Ok(None) => EntryResult::skipped(path),
        Err(e) => EntryResult::failure(path, e.to_string()),
    }
}

/// 내부 이름 변경 로직 (Ok(None) = 이름 변동 없음)
fn rename_file_internal(path: &Path, options: &RenameOptions) -> Result<Option<String>> {
    let file_name =
        path.file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| FRenameError::InvalidFileName {
                path: path.to_path_buf(),
            })?;

    let new_name = new_file_name(file_name, options);

    // 이름이 그대로면 파일 시스템을 건드리지 않음
    if new_name == file_name {
        return Ok(None);
    }

    if options.dry_run {
        return Ok(Some(new_name));
    }

    let new_path = path.with_file_name(&new_name);

    // 같은 이름이 이미 있으면 덮어쓰지 않고 해당 파일만 실패 처리
    if new_path.exists() {
        return Err(FRenameError::TargetExists {
            from: file_name.to_string(),
            to: new_name,
        });
    }

    fs::rename(path, &new_path).map_err(|e| FRenameError::RenameFailed {
        from: file_name.to_string(),
        to: new_name.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(new_name))
}
