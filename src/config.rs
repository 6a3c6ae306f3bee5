use std::{env, path::PathBuf};

/// 服务配置，进程启动时从环境变量读取一次，之后通过 AppState 传递
pub struct Config {
    pub excel_path: PathBuf,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            // Render 部署时设置 EXCEL_PATH=/data/redata.xlsx
            excel_path: PathBuf::from(var_or("EXCEL_PATH", "redata.xlsx")),
            port: var_or("PORT", "5000")
                .parse()
                .expect("PORT 必须是合法端口号"),
            debug: matches!(
                var_or("APP_DEBUG", "false").to_lowercase().as_str(),
                "1" | "true" | "yes"
            ),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
