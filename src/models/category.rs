/// 题目分类
///
/// 菜单显示英文名称，导出文件写入阿拉伯文名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Islamic,
    History,
    Geography,
    Animals,
    Sports,
    Science,
    Literature,
    Language,
    General,
    Riddles,
}

impl Category {
    /// 菜单顺序，编号从 1 开始
    pub const ALL: [Category; 10] = [
        Category::Islamic,
        Category::History,
        Category::Geography,
        Category::Animals,
        Category::Sports,
        Category::Science,
        Category::Literature,
        Category::Language,
        Category::General,
        Category::Riddles,
    ];

    /// 菜单中显示的名称
    pub fn label(self) -> &'static str {
        match self {
            Category::Islamic => "Islamic",
            Category::History => "History",
            Category::Geography => "Geography",
            Category::Animals => "Animals",
            Category::Sports => "Sports",
            Category::Science => "Science",
            Category::Literature => "Literature",
            Category::Language => "Language",
            Category::General => "General",
            Category::Riddles => "Riddles",
        }
    }

    /// 写入 JSON 的名称
    pub fn stored_value(self) -> &'static str {
        match self {
            Category::Islamic => "إسلاميات",
            Category::History => "تاريخ",
            Category::Geography => "جغرافيا",
            Category::Animals => "حيوانات",
            Category::Sports => "رياضة",
            Category::Science => "علوم",
            Category::Literature => "آداب",
            Category::Language => "لغة",
            Category::General => "عامة",
            Category::Riddles => "ألغاز",
        }
    }

    /// 按菜单编号（1..=10）查找
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
