use serde::Serialize;

/// Entry of the bookmarks bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub title: &'static str,
    pub url: &'static str,
}

pub static BOOKMARKS: [Bookmark; 5] = [
    Bookmark {
        title: "Google",
        url: "https://www.google.com",
    },
    Bookmark {
        title: "YouTube",
        url: "https://www.youtube.com",
    },
    Bookmark {
        title: "GitHub",
        url: "https://github.com",
    },
    Bookmark {
        title: "StackOverflow",
        url: "https://stackoverflow.com",
    },
    Bookmark {
        title: "PyPI",
        url: "https://pypi.org",
    },
];

impl Bookmark {
    pub fn all() -> &'static [Bookmark] {
        &BOOKMARKS
    }

    pub fn find(title: &str) -> Option<&'static Bookmark> {
        BOOKMARKS.iter().find(|b| b.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_order() {
        let titles: Vec<&str> = Bookmark::all().iter().map(|b| b.title).collect();
        assert_eq!(titles, ["Google", "YouTube", "GitHub", "StackOverflow", "PyPI"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(Bookmark::find("GitHub").unwrap().url, "https://github.com");
        assert!(Bookmark::find("github").is_none());
    }
}
