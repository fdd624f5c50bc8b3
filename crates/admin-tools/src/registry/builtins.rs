//! Built-in admin tools - SINGLE SOURCE OF TRUTH
//!
//! The admin menu, the breadcrumb index and every path lookup derive
//! from this list. Declaration order is menu order.

use super::{ToolDescriptor, ToolIcon};

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 4;

/// All built-in tools in display order.
pub static BUILTIN_TOOLS: [ToolDescriptor; BUILTIN_COUNT] = [
    ToolDescriptor::new(
        "邮件配置",
        "配置 SMTP 发件服务器与邮件模板",
        "/admin/email",
        ToolIcon::Mail,
    ),
    ToolDescriptor::new(
        "IP 安全",
        "管理 IP 黑白名单与访问频率限制",
        "/admin/ip-security",
        ToolIcon::Shield,
    ),
    ToolDescriptor::new(
        "审计日志",
        "查看管理员操作与安全事件记录",
        "/admin/audit-logs",
        ToolIcon::ScrollText,
    ),
    ToolDescriptor::new(
        "LDAP 配置",
        "配置 LDAP 目录服务登录认证",
        "/admin/ldap",
        ToolIcon::KeyRound,
    ),
];

/// Returns all built-in tools in display order.
pub fn builtin_tools() -> &'static [ToolDescriptor] {
    &BUILTIN_TOOLS
}
