use nh_core::{Article, ArticleSource};
use crate::defaults::{now_iso, DEFAULT_URL};

/// Hand-authored article, timestamped when materialized.
#[derive(Debug, Clone, Copy)]
pub struct FallbackArticle {
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub source: &'static str,
    pub author: &'static str,
    pub image: &'static str,
    pub category: &'static str,
}

impl FallbackArticle {
    fn to_article(self, published_at: &str) -> Article {
        Article {
            title: self.title.to_string(),
            description: self.description.to_string(),
            content: self.content.to_string(),
            source: ArticleSource::new(self.source),
            author: Some(self.author.to_string()),
            url: DEFAULT_URL.to_string(),
            url_to_image: self.image.to_string(),
            published_at: published_at.to_string(),
            category: self.category.to_string(),
        }
    }
}

/// Served when the AI gateway reply cannot be parsed.
pub const AI_GATEWAY_FALLBACK: [FallbackArticle; 3] = [
    FallbackArticle {
        title: "India's Technology Sector Shows Strong Growth in 2025",
        description: "The Indian tech industry continues to demonstrate robust expansion with significant investments in AI and digital infrastructure.",
        content: "India's technology sector has shown remarkable resilience and growth in the first quarter of 2025. Major tech companies are expanding operations and investing heavily in artificial intelligence and machine learning capabilities. The government's Digital India initiative continues to support this growth trajectory.",
        source: "Tech India",
        author: "Business Desk",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&q=80",
        category: "technology",
    },
    FallbackArticle {
        title: "New Infrastructure Projects Announced Across Major Cities",
        description: "Government unveils ambitious infrastructure development plans focusing on metro connectivity and smart city initiatives.",
        content: "The Ministry of Urban Development has announced a series of new infrastructure projects aimed at improving connectivity and urban living standards. These projects include metro expansions, smart traffic management systems, and green energy initiatives.",
        source: "India Today",
        author: "Infrastructure Desk",
        image: "https://images.unsplash.com/photo-1464938050520-ef2270bb8ce8?w=800&q=80",
        category: "business",
    },
    FallbackArticle {
        title: "Indian Cricket Team Prepares for International Series",
        description: "The national cricket team is gearing up for the upcoming international tournament with intensive training sessions.",
        content: "The Indian cricket team has intensified its preparation for the upcoming international series. The coaching staff has implemented new training regimens focusing on fitness and strategic gameplay.",
        source: "Sports India",
        author: "Sports Reporter",
        image: "https://images.unsplash.com/photo-1531415074968-036ba1b575da?w=800&q=80",
        category: "sports",
    },
];

/// Served when the search API document cannot be parsed. Kept separate from
/// [`AI_GATEWAY_FALLBACK`]; the wording differs per provider.
pub const SEARCH_API_FALLBACK: [FallbackArticle; 3] = [
    FallbackArticle {
        title: "Indian Startups Attract Record Investment in AI and Cloud",
        description: "Venture funding into Indian technology startups continues to climb as investors back AI, cloud and fintech ventures.",
        content: "Indian technology startups are drawing record levels of investment, with artificial intelligence and cloud services leading the way. Analysts point to a growing talent pool and expanding digital public infrastructure as key drivers of investor confidence.",
        source: "News Source",
        author: "Technology Desk",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&q=80",
        category: "technology",
    },
    FallbackArticle {
        title: "Markets Steady as Investors Watch Economic Indicators",
        description: "Benchmark indices trade in a narrow range as investors weigh inflation data and corporate earnings.",
        content: "Indian equity markets held steady as investors assessed the latest inflation figures and quarterly earnings reports. Banking and infrastructure stocks saw moderate gains while export-oriented sectors remained cautious.",
        source: "News Source",
        author: "Markets Desk",
        image: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&q=80",
        category: "business",
    },
    FallbackArticle {
        title: "Cricket Selectors Name Squad for Upcoming Home Series",
        description: "The national selection committee has announced the squad for the home series, blending experience with new talent.",
        content: "The national selectors have named the squad for the upcoming home series, recalling several experienced players alongside promising newcomers. Training camps begin next week ahead of the opening match.",
        source: "News Source",
        author: "Sports Desk",
        image: "https://images.unsplash.com/photo-1540747913346-19e32dc3e97e?w=800&q=80",
        category: "sports",
    },
];

/// Materializes a fallback set, stamping every article with the same "now".
pub fn materialize(set: &[FallbackArticle]) -> Vec<Article> {
    let now = now_iso();
    set.iter().map(|article| article.to_article(&now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_fallback_shape() {
        let articles = materialize(&AI_GATEWAY_FALLBACK);
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title, "India's Technology Sector Shows Strong Growth in 2025");
        let categories: Vec<&str> = articles.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(categories, vec!["technology", "business", "sports"]);
        assert!(articles.iter().all(|a| a.url == "#" && a.author.is_some()));
    }

    #[test]
    fn test_fallback_timestamp_shared() {
        let articles = materialize(&SEARCH_API_FALLBACK);
        assert!(articles.iter().all(|a| a.published_at == articles[0].published_at));
        assert!(chrono::DateTime::parse_from_rfc3339(&articles[0].published_at).is_ok());
    }
}
