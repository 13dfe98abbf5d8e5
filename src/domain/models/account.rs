// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// 数据校验错误
///
/// 请求负载在结构上存在缺陷时返回，区别于资源不存在
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataValidationError {
    /// 请求体不是合法的 JSON
    #[error("Invalid Account: body of request is not valid JSON - {0}")]
    MalformedJson(String),
    /// 请求体无法读取（例如超出大小限制）
    #[error("Invalid Account: body of request could not be read - {0}")]
    UnreadableBody(String),
    /// 请求体不是 JSON 对象
    #[error("Invalid Account: body of request contained bad or no data")]
    NotAnObject,
    /// 字段类型错误
    #[error("Invalid Account: body of request contained bad or no data - {0}")]
    InvalidData(String),
    /// 缺少必填字段
    #[error("Invalid Account: missing {0}")]
    MissingField(String),
    /// 字段超出长度限制
    #[error("Invalid Account: {field} exceeds {max} characters")]
    TooLong { field: String, max: u64 },
    /// 其他校验规则未通过
    #[error("Invalid Account: {field} failed {code} validation")]
    Invalid { field: String, code: String },
}

impl From<serde_json::Error> for DataValidationError {
    fn from(err: serde_json::Error) -> Self {
        DataValidationError::InvalidData(err.to_string())
    }
}

impl From<ValidationErrors> for DataValidationError {
    /// 按字段名排序后取第一条错误，保证提示信息稳定
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, error)) = fields
            .into_iter()
            .find_map(|(field, errs)| errs.first().map(|e| (field.to_string(), e)))
        else {
            return DataValidationError::InvalidData(errors.to_string());
        };

        match &*error.code {
            "required" => DataValidationError::MissingField(field),
            "length" => match error.params.get("max").and_then(Value::as_u64) {
                Some(max) => DataValidationError::TooLong { field, max },
                None => DataValidationError::Invalid {
                    field,
                    code: error.code.to_string(),
                },
            },
            code => DataValidationError::Invalid {
                field,
                code: code.to_string(),
            },
        }
    }
}

/// 账户请求负载
///
/// 只包含客户端可写的字段，`id` 与 `date_joined` 由服务端分配，
/// 出现在请求中时被忽略。长度限制与数据库列宽一致。
#[derive(Debug, Deserialize, Validate)]
pub struct AccountPayload {
    #[validate(required, length(max = 64))]
    pub name: Option<String>,

    #[validate(required, length(max = 64))]
    pub email: Option<String>,

    #[validate(length(max = 256))]
    pub address: Option<String>,

    #[validate(length(max = 32))]
    pub phone_number: Option<String>,
}

/// 账户实体
///
/// 一次请求内的临时内存表示，持久化由仓库负责。
/// `id` 与 `date_joined` 由服务端分配，序列化时 `date_joined` 格式为 `YYYY-MM-DD`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// 账户ID，创建前为空
    pub id: Option<i32>,
    /// 姓名
    pub name: String,
    /// 邮箱，不做唯一性约束
    pub email: String,
    /// 地址
    pub address: Option<String>,
    /// 电话号码
    pub phone_number: Option<String>,
    /// 加入日期
    pub date_joined: NaiveDate,
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl Account {
    /// 创建一个尚未持久化的空账户，加入日期为当前 UTC 日期
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            address: None,
            phone_number: None,
            date_joined: Utc::now().date_naive(),
        }
    }

    /// 从 JSON 对象填充可变字段
    ///
    /// 负载先反序列化为 [`AccountPayload`] 并完成校验，之后才写入实体，
    /// 失败时实体保持不变。
    ///
    /// # 参数
    ///
    /// * `payload` - 请求体
    ///
    /// # 返回值
    ///
    /// * `Ok(&mut Account)` - 填充后的账户
    /// * `Err(DataValidationError)` - 负载不合法
    pub fn deserialize(&mut self, payload: &Value) -> Result<&mut Self, DataValidationError> {
        // serde 会把数组当作元组结构体接受，这里只允许对象
        if !payload.is_object() {
            return Err(DataValidationError::NotAnObject);
        }

        let request: AccountPayload = serde_json::from_value(payload.clone())?;
        request.validate()?;

        self.name = request.name.unwrap_or_default();
        self.email = request.email.unwrap_or_default();
        self.address = request.address;
        self.phone_number = request.phone_number;
        Ok(self)
    }
}
