//! Plain-text export of a whole analysis.
//!
//! Raw report bodies are written as-is (trimmed); the export is meant to be
//! read in any text editor, not re-parsed.

use std::fmt::{self, Write};

use crate::models::{AnalysisResult, Audience};

pub const RULE: &str = "================================================================";
pub const SECTION_RULE: &str = "----------------------------------------------------------------";
pub const MISSING: &str = "미확인";
pub const TOOL_NAME: &str = "언론윤리 체크 도구";
pub const CLOSING_TITLE: &str = "CR-Check: AI 기반 언론윤리 분석 리포트";
pub const USAGE_GUIDE: &str = "※ 활용 가이드: 이 리포트는 뉴스를 비판적으로 읽을 수 있게 돕는 '보조 도구'입니다. AI는 기사의 보도 관행 패턴을 감지해 연계되는 윤리규범과 함께 보여줄 뿐, 이를 확정적 판단의 근거로 삼을 수는 없습니다. 리포트의 내용을 무조건 신뢰하기보다, 기사 원문과 비교하며 직접 판단하고 토론하는 자료로 활용해 주시기 바랍니다.";

const LOGO: &str = r"  ____ ____       ____ _               _
 / ___|  _ \     / ___| |__   ___  ___| | __
| |   | |_) |___| |   | '_ \ / _ \/ __| |/ /
| |___|  _ <|___| |___| | | |  __/ (__|   <
 \____|_| \_\    \____|_| |_|\___|\___|_|\_\";

/// Name of the downloaded export file.
pub fn file_name(unix_millis: i64) -> String {
    format!("CR-Check_Report_{unix_millis}.txt")
}

/// Builds the text export. `generated_at` is printed verbatim.
pub fn render_text(result: &AnalysisResult, generated_at: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, result, generated_at);
    out
}

/// Writes the text export to any formatter sink.
pub fn write_text(out: &mut impl Write, result: &AnalysisResult, generated_at: &str) -> fmt::Result {
    let info = &result.article_info;

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{LOGO}")?;
    writeln!(out)?;
    writeln!(out, "                  {TOOL_NAME}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "[ 분석 개요 ]")?;

    let fields: [(&str, Option<&str>); 11] = [
        ("생성 일시", Some(generated_at)),
        ("기사 제목", Some(info.title.as_str())),
        ("기사 URL ", Some(info.url.as_str())),
        ("매체명   ", info.publisher.as_deref()),
        ("기자명   ", info.journalist.as_deref()),
        ("게재일시 ", info.publish_date.as_deref()),
        ("기사 유형", info.article_type.as_deref()),
        ("기사 요소", info.article_elements.as_deref()),
        ("편집 구조", info.edit_structure.as_deref()),
        ("취재 방식", info.reporting_method.as_deref()),
        ("내용 흐름", info.content_flow.as_deref()),
    ];
    for (label, value) in fields {
        let value = value.filter(|v| !v.is_empty()).unwrap_or(MISSING);
        writeln!(out, "• {label}: {value}")?;
    }

    writeln!(out)?;
    writeln!(out, "{RULE}")?;

    for audience in Audience::ALL {
        writeln!(out)?;
        writeln!(out, "{SECTION_RULE}")?;
        writeln!(out, "  {}", audience.label())?;
        writeln!(out, "{SECTION_RULE}")?;
        writeln!(out)?;
        writeln!(out, "{}", result.reports.get(audience).trim())?;
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "  {CLOSING_TITLE}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "{USAGE_GUIDE}")
}
