use magnetomat::{config::AppConfig, App, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        magnetomat::init_production_tracing();
    }
    #[cfg(debug_assertions)]
    {
        magnetomat::init_dbg_tracing();
    }

    let config = AppConfig::from_env()?;
    let app = App::build_from_config(config).await?;

    magnetomat::serve(app).await?;

    Ok(())
}
