//! Launcher script templates.

/// Windows launcher. Switches the console to UTF-8 so the messages render.
pub const START_BAT_TEMPLATE: &str = r#"@echo off
chcp 65001 > nul
echo 启动 {{product_name}}...
if exist "{{binary_name}}.exe" (
    start "" "{{binary_name}}.exe"
) else (
    echo 错误: 找不到 {{binary_name}}.exe
    pause
)
"#;

/// Linux/macOS launcher. Falls back to the `.exe` name for single-file publishes.
pub const START_SH_TEMPLATE: &str = r#"#!/bin/bash
echo "启动 {{product_name}}..."
if [ -f "./{{binary_name}}" ]; then
    ./{{binary_name}}
elif [ -f "./{{binary_name}}.exe" ]; then
    ./{{binary_name}}.exe
else
    echo "错误: 找不到 {{binary_name}} 可执行文件"
    exit 1
fi
"#;
