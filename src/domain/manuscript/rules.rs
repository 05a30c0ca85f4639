//! Manuscript Context - 解析规则
//!
//! `ParserRules` 是一次解析所用的完整、不可变规则集；
//! `RuleOverrides` 是调用方提供的部分覆盖，按键整体替换，不做元素级合并。

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::{ContentType, ManuscriptError};

/// 内容类型 → 关键词列表（有序，先声明者优先）
pub type KeywordTable = Vec<(ContentType, Vec<String>)>;

/// 单字标题 → 内容类型（有序）
pub type SingleWordTable = Vec<(String, ContentType)>;

/// 完整解析规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserRules {
    /// 卷标题正则
    pub volume_patterns: Vec<String>,
    /// 章节标题正则
    pub chapter_patterns: Vec<String>,
    /// 标题清洗正则（只移除装饰性括号片段）
    pub title_clean_patterns: Vec<String>,
    /// 内容类型关键词
    #[serde(with = "ordered_pairs")]
    pub content_keywords: KeywordTable,
    /// 排除行正则（优先级最高）
    pub exclude_patterns: Vec<String>,
    /// 特殊单字匹配
    #[serde(with = "ordered_pairs")]
    pub single_word_types: SingleWordTable,
}

impl Default for ParserRules {
    fn default() -> Self {
        Self {
            volume_patterns: strings(&[
                r"^第?[一二三四五六七八九十百千万0-9]+[卷部册集]",
                r"^[上下前后]卷",
                r"^番外卷",
                r"^外传卷",
                r"^特别卷",
                r"^总集卷",
            ]),
            chapter_patterns: strings(&[
                r"^第?[一二三四五六七八九十百千万0-9]+[章节回话]",
                r"^序章",
                r"^终章",
                r"^尾声",
                r"^楔子",
                r"^引子",
                r"^前言",
                r"^后记",
                r"^番外[:：]",
                r"^外传[:：]",
                // 行首数字 + 分隔符 + 1~30 字标题
                r"^\s*[0-9]+\s*[.．、].{1,30}$",
            ]),
            title_clean_patterns: strings(&[
                r"【.*?】",
                r"『.*?』",
                r"〔.*?〕",
                r"（.*?）",
                r"\s*\(.*?\)\s*",
                r"\s*\[.*?\]\s*",
            ]),
            content_keywords: vec![
                (
                    ContentType::Extra,
                    strings(&["番外", "外传", "特别篇", "番外篇", "楔子"]),
                ),
                (
                    ContentType::Postscript,
                    strings(&["后记", "尾声", "作者的话", "结束语"]),
                ),
                (
                    ContentType::Notice,
                    strings(&["公告", "声明", "更新说明", "作者声明"]),
                ),
            ],
            exclude_patterns: strings(&[
                r"^版权声明",
                r"^版权所有",
                r"^本书版权",
                r"^著作权",
                r"^版权信息",
                r"^免责声明",
                r"^声明",
                r"^更新时间",
                r"^最后更新",
                r"^本书由",
                r"^本书来自",
                r"^内容简介",
                r"^书籍简介",
                r"^作者简介",
                r"^目录",
                r"^目\s*录",
                // 页码
                r"^\s*第\s*[一二三四五六七八九十百千万0-9]+\s*页",
                // 分页标记，如 1/100
                r"^\s*[0-9]+\s*/\s*[0-9]+",
            ]),
            single_word_types: vec![
                ("后记".to_string(), ContentType::Postscript),
                ("尾声".to_string(), ContentType::Postscript),
                ("楔子".to_string(), ContentType::Extra),
                ("番外".to_string(), ContentType::Extra),
            ],
        }
    }
}

impl ParserRules {
    /// 以当前规则为底，按键替换得到新的规则集（不修改 self）
    pub fn with_overrides(&self, overrides: &RuleOverrides) -> Self {
        let mut rules = self.clone();
        if let Some(patterns) = &overrides.volume_patterns {
            rules.volume_patterns = patterns.clone();
        }
        if let Some(patterns) = &overrides.chapter_patterns {
            rules.chapter_patterns = patterns.clone();
        }
        if let Some(patterns) = &overrides.title_clean_patterns {
            rules.title_clean_patterns = patterns.clone();
        }
        if let Some(keywords) = &overrides.content_keywords {
            rules.content_keywords = keywords.clone();
        }
        if let Some(patterns) = &overrides.exclude_patterns {
            rules.exclude_patterns = patterns.clone();
        }
        if let Some(words) = &overrides.single_word_types {
            rules.single_word_types = words.clone();
        }
        rules
    }

    /// 默认规则叠加覆盖
    pub fn from_overrides(overrides: Option<&RuleOverrides>) -> Self {
        match overrides {
            Some(overrides) => Self::default().with_overrides(overrides),
            None => Self::default(),
        }
    }
}

/// 部分规则覆盖
///
/// 每个出现的键整体替换默认值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_clean_patterns: Option<Vec<String>>,
    #[serde(with = "ordered_pairs::optional", skip_serializing_if = "Option::is_none")]
    pub content_keywords: Option<KeywordTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,
    #[serde(with = "ordered_pairs::optional", skip_serializing_if = "Option::is_none")]
    pub single_word_types: Option<SingleWordTable>,
}

impl RuleOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// 叠加更高优先级的覆盖：`higher` 中出现的键胜出
    pub fn overlay(self, higher: RuleOverrides) -> Self {
        Self {
            volume_patterns: higher.volume_patterns.or(self.volume_patterns),
            chapter_patterns: higher.chapter_patterns.or(self.chapter_patterns),
            title_clean_patterns: higher.title_clean_patterns.or(self.title_clean_patterns),
            content_keywords: higher.content_keywords.or(self.content_keywords),
            exclude_patterns: higher.exclude_patterns.or(self.exclude_patterns),
            single_word_types: higher.single_word_types.or(self.single_word_types),
        }
    }

    /// 检查所有出现的正则能否编译
    pub fn validate_patterns(&self) -> Result<(), ManuscriptError> {
        let lists = [
            &self.volume_patterns,
            &self.chapter_patterns,
            &self.title_clean_patterns,
            &self.exclude_patterns,
        ];
        for patterns in lists.into_iter().flatten() {
            compile_patterns(patterns, false)?;
        }
        Ok(())
    }
}

/// 按顺序编译正则列表
pub(crate) fn compile_patterns(
    patterns: &[String],
    case_insensitive: bool,
) -> Result<Vec<Regex>, ManuscriptError> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|source| ManuscriptError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 有序映射 ⇄ `Vec<(K, V)>`
///
/// 键总是以字符串读写，再经 `FromStr`/`Display` 转换
mod ordered_pairs {
    use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use std::fmt::{self, Display};
    use std::marker::PhantomData;
    use std::str::FromStr;

    #[allow(clippy::ptr_arg)]
    pub fn serialize<K, V, S>(pairs: &Vec<(K, V)>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Display,
        V: Serialize,
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (key, value) in pairs {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
    where
        K: FromStr,
        K::Err: Display,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PairsVisitor(PhantomData))
    }

    struct PairsVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K, V> Visitor<'de> for PairsVisitor<K, V>
    where
        K: FromStr,
        K::Err: Display,
        V: Deserialize<'de>,
    {
        type Value = Vec<(K, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table of key/value pairs")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                let key = key.parse::<K>().map_err(de::Error::custom)?;
                pairs.push((key, value));
            }
            Ok(pairs)
        }
    }

    pub mod optional {
        use super::*;

        pub fn serialize<K, V, S>(pairs: &Option<Vec<(K, V)>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            K: Display,
            V: Serialize,
            S: Serializer,
        {
            match pairs {
                Some(pairs) => super::serialize(pairs, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<Option<Vec<(K, V)>>, D::Error>
        where
            K: FromStr,
            K::Err: Display,
            V: Deserialize<'de>,
            D: Deserializer<'de>,
        {
            super::deserialize(deserializer).map(Some)
        }
    }
}
