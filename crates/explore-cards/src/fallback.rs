//! Deterministic per-object fallback cards, used when a card subtask times
//! out or (with `use_ai_model` disabled) whenever a live model would
//! otherwise be called. Ported table-for-table from the reference system's
//! name-keyed mock data.

use crate::types::{Card, CardType};
use serde_json::json;

fn science_explanation(name: &str) -> &'static str {
    match name {
        "银杏" => "银杏是非常古老的植物，已经在地球上生存了2亿多年。",
        "苹果" => "苹果是一种营养丰富的水果，含有多种维生素和矿物质。",
        "蝴蝶" => "蝴蝶是美丽的昆虫，会经历从卵到幼虫、蛹、成虫的完全变态过程。",
        "书本" => "书本是人类知识的载体，记录着历史和智慧。",
        "汽车" => "汽车是现代重要的交通工具，使用发动机驱动。",
        "月亮" => "月亮是地球的卫星，围绕地球旋转，影响潮汐。",
        "钢琴" => "钢琴是一种键盘乐器，可以演奏丰富的音乐。",
        "太阳" => "太阳是太阳系的中心，为地球提供光和热。",
        _ => "",
    }
}

fn science_facts(name: &str) -> Vec<&'static str> {
    match name {
        "银杏" => vec![
            "银杏是现存最古老的树种之一",
            "银杏的叶子在秋天会变成金黄色",
            "银杏的果实可以食用，但需要处理",
        ],
        "苹果" => vec![
            "苹果含有丰富的维生素C",
            "每天一个苹果有助于健康",
            "苹果有很多品种，颜色和味道不同",
        ],
        "蝴蝶" => vec![
            "蝴蝶有美丽的翅膀",
            "蝴蝶可以帮助传播花粉",
            "不同种类的蝴蝶有不同的颜色",
        ],
        _ => vec!["这是一个有趣的事实", "还有更多知识等待探索"],
    }
}

fn fun_fact(name: &str) -> String {
    match name {
        "银杏" => "银杏被称为'活化石'，因为它在恐龙时代就已经存在了！".to_string(),
        "苹果" => "苹果的种子含有少量氰化物，但吃几个苹果不会中毒！".to_string(),
        "蝴蝶" => "蝴蝶的翅膀上有细小的鳞片，这些鳞片创造了美丽的颜色！".to_string(),
        _ => format!("关于{}还有很多有趣的知识等待发现！", name),
    }
}

pub fn science_card(object_name: &str) -> Card {
    let explanation = if science_explanation(object_name).is_empty() {
        format!("{}是一个有趣的对象，值得我们探索和学习。", object_name)
    } else {
        science_explanation(object_name).to_string()
    };
    Card {
        card_type: CardType::Science,
        title: format!("{}的科学知识", object_name),
        content: json!({
            "name": object_name,
            "explanation": explanation,
            "facts": science_facts(object_name),
            "funFact": fun_fact(object_name),
        }),
    }
}

fn poem(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "银杏" => Some(("满地翻黄银杏叶，忽惊天地告成功。", "《夜坐》- 李清照")),
        "苹果" => Some(("苹果红时秋已深，满园香气醉人心。", "现代诗歌")),
        "蝴蝶" => Some(("穿花蛱蝶深深见，点水蜻蜓款款飞。", "《曲江二首》- 杜甫")),
        "月亮" => Some(("床前明月光，疑是地上霜。", "《静夜思》- 李白")),
        "太阳" => Some(("日出江花红胜火，春来江水绿如蓝。", "《忆江南》- 白居易")),
        _ => None,
    }
}

pub fn poetry_card(object_name: &str) -> Card {
    let (poem_text, source) = poem(object_name).unwrap_or((
        "关于该事物的古诗词，等待我们去发现。",
        "古诗词",
    ));
    Card {
        card_type: CardType::Poetry,
        title: format!("古人怎么看{}", object_name),
        content: json!({
            "poem": poem_text,
            "poemSource": source,
            "explanation": format!("这句诗描写了{}的美丽景象，让我们感受到古人的智慧和情感。", object_name),
            "context": format!("看到{}，我们可以联想到相关的文化和历史，丰富我们的认知。", object_name),
        }),
    }
}

fn english_keywords(name: &str) -> Vec<&'static str> {
    match name {
        "银杏" => vec!["ginkgo", "tree", "ancient"],
        "苹果" => vec!["apple", "fruit", "red"],
        "蝴蝶" => vec!["butterfly", "insect", "beautiful"],
        "书本" => vec!["book", "knowledge", "reading"],
        "汽车" => vec!["car", "vehicle", "transport"],
        "月亮" => vec!["moon", "night", "round"],
        "钢琴" => vec!["piano", "music", "instrument"],
        "太阳" => vec!["sun", "bright", "energy"],
        _ => vec![],
    }
}

fn english_expressions(name: &str) -> Vec<String> {
    match name {
        "银杏" => vec![
            "This is a ginkgo tree.".to_string(),
            "The ginkgo leaves are golden in autumn.".to_string(),
        ],
        "苹果" => vec![
            "This is an apple.".to_string(),
            "I like to eat apples.".to_string(),
        ],
        "蝴蝶" => vec![
            "Look at the beautiful butterfly!".to_string(),
            "Butterflies fly in the garden.".to_string(),
        ],
        _ => vec![
            format!("This is {}.", name),
            "It's very interesting.".to_string(),
        ],
    }
}

fn pronunciation(name: &str) -> String {
    match name {
        "银杏" => "ginkgo: /ˈɡɪŋkoʊ/".to_string(),
        "苹果" => "apple: /ˈæpl/".to_string(),
        "蝴蝶" => "butterfly: /ˈbʌtərflaɪ/".to_string(),
        _ => format!("{}: pronunciation", name),
    }
}

pub fn english_card(object_name: &str) -> Card {
    let keywords = english_keywords(object_name);
    let keywords = if keywords.is_empty() {
        vec![object_name.to_string(), "object".to_string(), "interesting".to_string()]
    } else {
        keywords.into_iter().map(String::from).collect()
    };
    Card {
        card_type: CardType::English,
        title: format!("用英语说{}", object_name),
        content: json!({
            "keywords": keywords,
            "expressions": english_expressions(object_name),
            "pronunciation": pronunciation(object_name),
        }),
    }
}
