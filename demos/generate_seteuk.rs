use dotenv::dotenv;
use seteuk_writer::{
    read_files, render, GeminiClient, LengthOption, Phase, SeTeukGenerator, SeTeukInput, Session,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    println!("🚀 Drafting a SeTeuk entry with Gemini...");

    let generator = SeTeukGenerator::new(GeminiClient::from_env()?);

    // Attach any files passed on the command line (PDFs, photos, .txt notes).
    let paths: Vec<String> = std::env::args().skip(1).collect();
    let files = read_files(&paths).await?;
    if !files.is_empty() {
        println!("📎 Attached {} file(s).", files.len());
    }

    let mut input = SeTeukInput::new()
        .with_activity_data("토론 동아리에서 기후 변화 주제로 자료를 조사하고 발표함")
        .with_teacher_comments("데이터를 근거로 반론에 차분하게 대응하는 모습이 인상적이었음")
        .with_length_option(LengthOption::Standard)
        .with_keyword("탐구력")
        .with_keyword("의사소통 능력");
    input.files = files;

    let mut session = Session::new();
    if let Err(e) = session.submit(&generator, &input).await {
        eprintln!("{}", session.error_message().unwrap_or(&e.to_string()));
        return Err(e.into());
    }

    if session.phase() == Phase::Success {
        if let Some(result) = session.result() {
            println!("\n{}", render::format_report(result));
        }
    }

    Ok(())
}
