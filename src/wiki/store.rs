// region:    --- Imports
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

// endregion: --- Imports

pub const TITLE_MAX_LEN: usize = 32;

/// 마크다운 파일 기반 문서 저장소
///
/// 디렉터리 목록이 곧 전체 문서 목록이며 별도 인덱스는 없다.
#[derive(Debug, Clone)]
pub struct EntryStore {
    dir: PathBuf,
}

/// 디렉터리 밖을 가리키지 않는 파일 이름인지 확인
pub fn is_safe_name(title: &str) -> bool {
    !title.is_empty()
        && title != "."
        && title != ".."
        && !title.chars().any(|c| c == '/' || c == '\\' || c.is_control())
}

/// 새 문서 제목 규칙 (길이 제한, 숨김 파일 금지)
pub fn is_valid_title(title: &str) -> bool {
    is_safe_name(title) && title.chars().count() <= TITLE_MAX_LEN && !title.starts_with('.')
}

impl EntryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 저장소 디렉터리 생성
    pub async fn init(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await?;
        info!("{:<12} --> 문서 디렉터리: {}", "Store", self.dir.display());
        Ok(())
    }

    fn entry_path(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{title}.md"))
    }

    /// 전체 문서 제목 (정렬)
    pub async fn list_entries(&self) -> std::io::Result<Vec<String>> {
        let mut entries = Vec::new();
        let mut dir = match fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(e),
        };
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(title) = name.to_str().and_then(|n| n.strip_suffix(".md")) {
                if is_safe_name(title) {
                    entries.push(title.to_string());
                }
            }
        }
        entries.sort();
        Ok(entries)
    }

    /// 저장된 제목과 정확히 일치하는 문서 내용
    pub async fn get_entry(&self, title: &str) -> std::io::Result<Option<String>> {
        if !is_safe_name(title) {
            return Ok(None);
        }
        // 대소문자를 구분하지 않는 파일 시스템에서도 정확히 일치해야 한다
        if !self.list_entries().await?.iter().any(|t| t == title) {
            debug!("{:<12} --> 문서 없음: {}", "Store", title);
            return Ok(None);
        }
        match fs::read_to_string(self.entry_path(title)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// 대소문자 구분 없이 같은 제목의 문서
    pub async fn find_case_insensitive(&self, title: &str) -> std::io::Result<Option<String>> {
        let lower = title.to_lowercase();
        Ok(self
            .list_entries()
            .await?
            .into_iter()
            .find(|t| t.to_lowercase() == lower))
    }

    /// 문서 저장 (기존 내용은 통째로 덮어쓴다)
    pub async fn save_entry(&self, title: &str, contents: &str) -> std::io::Result<()> {
        if !is_safe_name(title) {
            return Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("invalid entry title: {title:?}"),
            ));
        }
        fs::create_dir_all(&self.dir).await?;
        let contents = contents.replace("\r\n", "\n");
        fs::write(self.entry_path(title), contents).await?;
        info!("{:<12} --> 문서 저장: {}", "Store", title);
        Ok(())
    }

    /// 부분 문자열 검색 (대소문자 무시)
    pub async fn search(&self, query: &str) -> std::io::Result<Vec<String>> {
        let query = query.to_lowercase();
        Ok(self
            .list_entries()
            .await?
            .into_iter()
            .filter(|t| t.to_lowercase().contains(&query))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, EntryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = EntryStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn title_rules() {
        assert!(is_valid_title("Python"));
        assert!(is_valid_title("Rust lang"));
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("../etc/passwd"));
        assert!(!is_valid_title(".hidden"));
        assert!(!is_valid_title("a\\b"));
        assert!(!is_valid_title("line\nbreak"));
        assert!(!is_valid_title(&"x".repeat(TITLE_MAX_LEN + 1)));
    }

    #[test]
    fn stored_names_only_need_to_be_path_safe() {
        let long = "A Fairly Long Encyclopedia Article Title";
        assert!(is_safe_name(long));
        assert!(!is_valid_title(long));
        assert!(!is_safe_name(".."));
        assert!(!is_safe_name("a/b"));
        assert!(!is_safe_name("tab\there"));
    }

    #[tokio::test]
    async fn long_names_on_disk_are_listed_and_readable() {
        let (dir, store) = store();
        let title = "A Fairly Long Encyclopedia Article Title";
        assert!(title.chars().count() > TITLE_MAX_LEN);
        std::fs::write(dir.path().join(format!("{title}.md")), "# Long").unwrap();

        assert_eq!(store.list_entries().await.unwrap(), vec![title]);
        assert_eq!(
            store.get_entry(title).await.unwrap().as_deref(),
            Some("# Long")
        );
        assert_eq!(store.search("encyclopedia").await.unwrap(), vec![title]);

        store.save_entry(title, "# Edited").await.unwrap();
        assert_eq!(
            store.get_entry(title).await.unwrap().as_deref(),
            Some("# Edited")
        );
    }

    #[tokio::test]
    async fn lists_sorted_markdown_files_only() {
        let (dir, store) = store();
        store.save_entry("Python", "# Python").await.unwrap();
        store.save_entry("CSS", "# CSS").await.unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("sub.md")).unwrap();

        assert_eq!(store.list_entries().await.unwrap(), vec!["CSS", "Python"]);
    }

    #[tokio::test]
    async fn missing_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("absent"));
        assert!(store.list_entries().await.unwrap().is_empty());
        assert_eq!(store.get_entry("Python").await.unwrap(), None);
    }

    #[tokio::test]
    async fn retrieval_is_exact_match() {
        let (_dir, store) = store();
        store.save_entry("Python", "# Python").await.unwrap();

        assert_eq!(
            store.get_entry("Python").await.unwrap().as_deref(),
            Some("# Python")
        );
        assert_eq!(store.get_entry("python").await.unwrap(), None);
        assert_eq!(
            store.find_case_insensitive("PYTHON").await.unwrap().as_deref(),
            Some("Python")
        );
    }

    #[tokio::test]
    async fn save_overwrites_and_normalises_newlines() {
        let (_dir, store) = store();
        store.save_entry("Git", "old").await.unwrap();
        store.save_entry("Git", "line one\r\nline two").await.unwrap();
        assert_eq!(
            store.get_entry("Git").await.unwrap().as_deref(),
            Some("line one\nline two")
        );
    }

    #[tokio::test]
    async fn save_rejects_path_titles() {
        let (_dir, store) = store();
        let err = store.save_entry("../escape", "x").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let (_dir, store) = store();
        for title in ["Python", "CSS", "HTML", "Django"] {
            store.save_entry(title, "x").await.unwrap();
        }
        assert_eq!(store.search("py").await.unwrap(), vec!["Python"]);
        assert_eq!(store.search("s").await.unwrap(), vec!["CSS"]);
        assert!(store.search("zzz").await.unwrap().is_empty());
    }
}
