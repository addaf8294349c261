//! `.gitignore`

const PATTERNS: &[&str] = &[
    "# Logs",
    "logs",
    "*.log",
    "npm-debug.log*",
    "yarn-debug.log*",
    "yarn-error.log*",
    "pnpm-debug.log*",
    "lerna-debug.log*",
    "",
    "node_modules",
    "dist",
    "dist-ssr",
    "*.local",
    "",
    "# Editor directories and files",
    ".vscode/*",
    "!.vscode/extensions.json",
    ".idea",
    ".DS_Store",
    "*.suo",
    "*.ntvs*",
    "*.njsproj",
    "*.sln",
    "*.sw?",
];

pub fn derive() -> String {
    let mut text = PATTERNS.join("\n");
    text.push('\n');
    text
}
