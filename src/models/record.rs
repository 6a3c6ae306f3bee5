use serde::{Deserialize, Serialize};

/// Excel 中的一行记录，列顺序固定：timestamp, specialty, text, relation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    pub timestamp: String, // 服务端生成，格式 "YYYY-MM-DD HH:MM:SS"
    pub specialty: String,
    pub text: String,
    pub relation: String,
}

/// 前端表单提交的 JSON。三个字段均必填，用 Option 接收以便缺失时
/// 返回统一的 "fields missing" 400，而不是框架默认的反序列化错误；多余字段忽略
#[derive(Deserialize)]
pub struct SubmitPayload {
    pub specialty: Option<String>,
    pub text: Option<String>,
    pub relation: Option<String>,
}
