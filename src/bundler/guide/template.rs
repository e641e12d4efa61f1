//! Usage guide template.

/// Chinese usage guide. `build_time` is filled with the version label.
pub const GUIDE_TEMPLATE: &str = r#"# {{product_name}} {{version}}

## 快速开始

### Windows 用户
双击 `start.bat` 或直接运行 `{{binary_name}}.exe`

### Linux/macOS 用户  
运行 `./start.sh` 或直接运行 `./{{binary_name}}`

## 配置文件

- `interface.json` - 主配置文件，定义任务和资源
- `resource/` - MAA 资源文件目录
- `lang/` - 多语言支持文件

## 首次使用

1. 确保已安装 .NET 8.0 运行时
2. 将你的 MAA 项目资源文件复制到 `resource/` 目录
3. 根据你的项目修改 `interface.json` 配置文件
4. 运行程序

## 获取帮助

- 项目主页: {{homepage}}  
- 问题反馈: {{homepage}}/issues

构建时间: {{build_time}}
"#;
