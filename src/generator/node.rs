use super::{Intent, join};
use crate::ecosystem::NodePackageManager;

/// Script names invoked for the intents that map onto `package.json` scripts
fn script_for(intent: Intent) -> &'static str {
    match intent {
        Intent::Install => "install",
        Intent::Build => "build",
        Intent::Test => "test",
        Intent::Lint => "lint",
        Intent::Format => "format",
    }
}

pub(super) fn command(intent: Intent, manager: NodePackageManager) -> String {
    let pm = manager.as_str();
    match intent {
        Intent::Install | Intent::Test => format!("{pm} {}", script_for(intent)),
        _ => run(script_for(intent), manager),
    }
}

/// Yarn runs scripts without the `run` keyword.
pub(super) fn run(script: &str, manager: NodePackageManager) -> String {
    match manager {
        NodePackageManager::Yarn => join("yarn", script),
        other => join(&format!("{} run", other.as_str()), script),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(manager: NodePackageManager) -> Vec<String> {
        let mut row: Vec<String> = Intent::ALL
            .iter()
            .map(|intent| command(*intent, manager))
            .collect();
        row.push(run("dev", manager));
        row
    }

    #[test]
    fn test_npm() {
        assert_eq!(
            row(NodePackageManager::Npm),
            vec![
                "npm install",
                "npm run build",
                "npm test",
                "npm run lint",
                "npm run format",
                "npm run dev"
            ]
        );
    }

    #[test]
    fn test_pnpm() {
        assert_eq!(
            row(NodePackageManager::Pnpm),
            vec![
                "pnpm install",
                "pnpm run build",
                "pnpm test",
                "pnpm run lint",
                "pnpm run format",
                "pnpm run dev"
            ]
        );
    }

    #[test]
    fn test_yarn() {
        assert_eq!(
            row(NodePackageManager::Yarn),
            vec![
                "yarn install",
                "yarn build",
                "yarn test",
                "yarn lint",
                "yarn format",
                "yarn dev"
            ]
        );
    }

    #[test]
    fn test_bun() {
        assert_eq!(
            row(NodePackageManager::Bun),
            vec![
                "bun install",
                "bun run build",
                "bun test",
                "bun run lint",
                "bun run format",
                "bun run dev"
            ]
        );
    }

    #[test]
    fn test_unknown_manager_falls_back_to_npm() {
        let manager = NodePackageManager::parse_or_default(Some("volta"));
        assert_eq!(command(Intent::Build, manager), "npm run build");
    }
}
