//! タブ（アセット一覧の絞り込み区分）

use crate::asset::AssetKind;

/// タブ種別
///
/// 任意の文字列から構築でき、未知のラベルは `Other` として保持する。
/// `Other` は下流のフィルタで `Featured` と同じく全件を通す。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Featured,
    Kpi,
    Layouts,
    Storyboards,
    DataViz,
    Other(String),
}

static KNOWN_TABS: [Tab; 5] = [
    Tab::Featured,
    Tab::Kpi,
    Tab::Layouts,
    Tab::Storyboards,
    Tab::DataViz,
];

impl Tab {
    /// 既知のタブ一覧（表示順）
    pub fn all() -> &'static [Tab] {
        &KNOWN_TABS
    }

    /// ラベル文字列からタブを構築（完全一致、大文字小文字を区別）
    pub fn parse(label: &str) -> Self {
        match label {
            "Featured" => Tab::Featured,
            "KPI" => Tab::Kpi,
            "Layouts" => Tab::Layouts,
            "Storyboards" => Tab::Storyboards,
            "DataViz" => Tab::DataViz,
            other => Tab::Other(other.to_string()),
        }
    }

    /// 既知ラベルを持つ `Other` を対応する既知タブに揃える
    pub fn normalized(self) -> Self {
        match self {
            Tab::Other(label) => Tab::parse(&label),
            tab => tab,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Tab::Featured => "Featured",
            Tab::Kpi => "KPI",
            Tab::Layouts => "Layouts",
            Tab::Storyboards => "Storyboards",
            Tab::DataViz => "DataViz",
            Tab::Other(label) => label,
        }
    }

    /// 絞り込み対象の種別（複数形ラベル → 単数形 type）
    ///
    /// `None` は全件を通すことを意味する。
    pub fn kind(&self) -> Option<AssetKind> {
        match self {
            Tab::Kpi => Some(AssetKind::Kpi),
            Tab::Layouts => Some(AssetKind::Layout),
            Tab::Storyboards => Some(AssetKind::Storyboard),
            Tab::DataViz => Some(AssetKind::DataViz),
            Tab::Other(label) => match Tab::parse(label) {
                Tab::Other(_) => None,
                known => known.kind(),
            },
            Tab::Featured => None,
        }
    }

    /// 既知タブ内での位置（未知ラベルは None）
    pub fn index(&self) -> Option<usize> {
        let tab = self.clone().normalized();
        Self::all().iter().position(|t| *t == tab)
    }

    pub fn from_index(index: usize) -> Self {
        let all = Self::all();
        all[index % all.len()].clone()
    }

    /// 次のタブへ（未知ラベルからは Featured に戻る）
    pub fn next(&self) -> Self {
        match self.index() {
            Some(i) => Self::from_index(i + 1),
            None => Tab::Featured,
        }
    }

    pub fn prev(&self) -> Self {
        match self.index() {
            Some(i) => Self::from_index(i + Self::all().len() - 1),
            None => Tab::Featured,
        }
    }
}

impl From<&str> for Tab {
    fn from(label: &str) -> Self {
        Tab::parse(label)
    }
}

impl From<String> for Tab {
    fn from(label: String) -> Self {
        Tab::parse(&label)
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
#[path = "tab_test.rs"]
mod tests;
