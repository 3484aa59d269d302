use super::{Intent, join};
use crate::ecosystem::PythonPackageManager;

pub(super) fn command(intent: Intent, manager: PythonPackageManager) -> String {
    let command = match (manager, intent) {
        (PythonPackageManager::Pip, Intent::Install) => "pip install -r requirements.txt",
        (PythonPackageManager::Pip, Intent::Build) => "python -m build",
        (PythonPackageManager::Pip, Intent::Test) => "pytest",
        (PythonPackageManager::Pip3, Intent::Install) => "pip3 install -r requirements.txt",
        (PythonPackageManager::Pip3, Intent::Build) => "python3 -m build",
        (PythonPackageManager::Pip3, Intent::Test) => "python3 -m pytest",
        (PythonPackageManager::Pip | PythonPackageManager::Pip3, Intent::Lint) => "ruff check .",
        (PythonPackageManager::Pip | PythonPackageManager::Pip3, Intent::Format) => "ruff format .",
        (PythonPackageManager::Poetry, Intent::Install) => "poetry install",
        (PythonPackageManager::Poetry, Intent::Build) => "poetry build",
        (PythonPackageManager::Poetry, Intent::Test) => "poetry run pytest",
        (PythonPackageManager::Poetry, Intent::Lint) => "poetry run ruff check .",
        (PythonPackageManager::Poetry, Intent::Format) => "poetry run ruff format .",
        (PythonPackageManager::Uv, Intent::Install) => "uv sync",
        (PythonPackageManager::Uv, Intent::Build) => "uv build",
        (PythonPackageManager::Uv, Intent::Test) => "uv run pytest",
        (PythonPackageManager::Uv, Intent::Lint) => "uv run ruff check .",
        (PythonPackageManager::Uv, Intent::Format) => "uv run ruff format .",
    };
    command.to_string()
}

pub(super) fn run(script: &str, manager: PythonPackageManager) -> String {
    let prefix = match manager {
        PythonPackageManager::Pip => "python",
        PythonPackageManager::Pip3 => "python3",
        PythonPackageManager::Poetry => "poetry run",
        PythonPackageManager::Uv => "uv run",
    };
    join(prefix, script)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(manager: PythonPackageManager) -> Vec<String> {
        let mut row: Vec<String> = Intent::ALL
            .iter()
            .map(|intent| command(*intent, manager))
            .collect();
        row.push(run("app.py", manager));
        row
    }

    #[test]
    fn test_pip_and_pip3() {
        assert_eq!(
            row(PythonPackageManager::Pip),
            vec![
                "pip install -r requirements.txt",
                "python -m build",
                "pytest",
                "ruff check .",
                "ruff format .",
                "python app.py"
            ]
        );
        assert_eq!(
            row(PythonPackageManager::Pip3),
            vec![
                "pip3 install -r requirements.txt",
                "python3 -m build",
                "python3 -m pytest",
                "ruff check .",
                "ruff format .",
                "python3 app.py"
            ]
        );
    }

    #[test]
    fn test_poetry() {
        assert_eq!(
            row(PythonPackageManager::Poetry),
            vec![
                "poetry install",
                "poetry build",
                "poetry run pytest",
                "poetry run ruff check .",
                "poetry run ruff format .",
                "poetry run app.py"
            ]
        );
    }

    #[test]
    fn test_uv() {
        assert_eq!(
            row(PythonPackageManager::Uv),
            vec![
                "uv sync",
                "uv build",
                "uv run pytest",
                "uv run ruff check .",
                "uv run ruff format .",
                "uv run app.py"
            ]
        );
    }
}
