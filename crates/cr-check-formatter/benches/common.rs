// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_report_content(size: usize) -> String {
    let base = "# 종합 평가\n\n## 보도 관행\n\n이 기사는 **익명 취재원**에 의존합니다. 언론윤리헌장 제4조 사실과 의견을 구분한다.\n\n- 신문윤리실천요강 제3조(보도준칙)\n- 기자윤리실천요강 3-1) 취재원 보호\n\n```\n인용 원문\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn citation_patterns() -> Vec<&'static str> {
    vec![
        r"언론윤리헌장\s*제\s*\d+조[^.\n]*",
        r"신문윤리실천요강\s*제\s*\d+조[^.\n]*",
        r"기자윤리실천요강\s*\d+-\d+\)[^.\n]*",
        r"한국기자협회\s*윤리강령\s*제\s*\d+조[^.\n]*",
    ]
}
