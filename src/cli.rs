//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// frename CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "frename",
    author = "YourName <your@email.com>",
    version,
    about = "FILE BATCH RENAMER - 폴더 내 파일 이름에 접두사/접미사를 일괄 추가하는 CLI 도구",
    long_about = r#"
FILE BATCH RENAMER
==================

지정된 폴더의 일반 파일들에 접두사/접미사를 붙여
파일 이름을 일괄 변경합니다. 확장자는 그대로 유지됩니다.

특징:
  • 접두사/접미사 자유 조합 (둘 중 하나만도 가능)
  • 드라이런 모드로 변경 내용 미리 확인
  • 글로브 패턴으로 대상 파일 필터링
  • 파일별 에러 격리 (한 파일이 실패해도 계속 진행)
  • 이름이 바뀌지 않는 파일은 자동 건너뜀
  • 상세한 처리 통계 출력

예제:
  frename -d ./photos -p "2024_"
  frename -d ./logs -s "_old" --dry-run
  frename -d ./docs -p "draft_" --pattern "*.md"
  frename -d ./data -s "_bak" --verbose --log errors.log
"#
)]
pub struct Args {
    /// 이름을 변경할 파일들이 있는 폴더 경로
    #[arg(short, long)]
    pub directory: PathBuf,

    /// 파일 이름 앞에 붙일 접두사
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// 확장자 앞에 붙일 접미사
    #[arg(short, long, default_value = "")]
    pub suffix: String,

    /// 실제 변경 없이 변경될 이름만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "*.txt", "IMG_*")
    #[arg(long)]
    pub pattern: Option<String>,

    /// 상세 출력 모드 (건너뛴 파일도 표시)
    #[arg(short, long)]
    pub verbose: bool,

    /// 에러 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl Args {
    /// 접두사나 접미사 중 하나라도 지정되었는지 확인
    pub fn has_transform(&self) -> bool {
        !self.prefix.is_empty() || !self.suffix.is_empty()
    }
}
