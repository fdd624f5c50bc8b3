//! Snapshot tests for the admin menu export

use admin_tools::{menu, ToolDescriptor, ToolIcon, ToolRegistry};

#[test]
fn test_builtin_menu_json() {
    let json = menu::to_json_pretty(ToolRegistry::builtin()).unwrap();
    insta::assert_snapshot!(json, @r#"
    [
      {
        "name": "邮件配置",
        "description": "配置 SMTP 发件服务器与邮件模板",
        "path": "/admin/email",
        "icon": "mail"
      },
      {
        "name": "IP 安全",
        "description": "管理 IP 黑白名单与访问频率限制",
        "path": "/admin/ip-security",
        "icon": "shield"
      },
      {
        "name": "审计日志",
        "description": "查看管理员操作与安全事件记录",
        "path": "/admin/audit-logs",
        "icon": "scroll-text"
      },
      {
        "name": "LDAP 配置",
        "description": "配置 LDAP 目录服务登录认证",
        "path": "/admin/ldap",
        "icon": "key-round"
      }
    ]
    "#);
}

#[test]
fn test_compact_menu_json() {
    let registry = ToolRegistry::from_tools(vec![ToolDescriptor::new(
        "审计日志",
        "logs",
        "/admin/audit-logs",
        ToolIcon::ScrollText,
    )]);

    let json = menu::to_json(&registry).unwrap();
    assert_eq!(
        json,
        r#"[{"name":"审计日志","description":"logs","path":"/admin/audit-logs","icon":"scroll-text"}]"#
    );
}
