use anyhow::Result;
use quiz_txt_export::{logger, App, Config};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init()?;

    let app = App::new(Config::default());

    // 失败只提示，不改变退出码
    if let Err(e) = app.run().await {
        error!("❌ 转换失败: {}", e);
        println!("{}", app.failure_message(&e));
    }

    Ok(())
}
