//! Prompt text and user-facing fallback messages
//!
//! The commentary prompt asks for four fixed Markdown sections written for a
//! young, non-specialist reader. The section layout is requested, never
//! checked.

use relay_prompt::{Language, LocalizedTemplate, Result};

/// Template identifier of the commentary prompt
pub const ANALYSIS_PROMPT: &str = "stock.user.analyze";

/// System instruction sent with every commentary request
pub const SYSTEM_INSTRUCTION: &str = "You are a professional yet accessible financial mentor.";

const ANALYSIS_EN: &str = r#"You are a fund manager with 20 years on Wall Street, explaining investing to a sharp Gen-Z student (high school or college).

Target: **{{ name }} ({{ symbol }})**
Current price: ${{ price }}
Today's change: {{ change }}{% if percent_change is defined %} ({{ percent_change }}%){% endif %}

**Requirements:**
1. No jargon dumps. Explain the business logic in plain words.
2. Make it substantive: moat, how it makes money, where growth comes from.
3. Use Markdown and follow exactly these four sections:

# 🧠 Business Model (how does it make money?)
[Explain the core business in plain terms. Do not copy the company profile; say why it is strong or weak.]

# 📊 Sentiment & Valuation (is it expensive?)
[Using today's move, is everyone piling in or heading for the exits? Touch briefly on how to think about valuation.]

# 🚀 Upside Catalysts vs 💣 Downside Risks
[List the 1-2 biggest opportunities (AI? rate cuts?) and the biggest risks (competition? regulation?).]

# 👨‍🏫 Ryan's Verdict
[Give a clear, opinionated conclusion, e.g. "wait and see short term, hold long term" or "right now this is a casino".]
"#;

const ANALYSIS_ZH: &str = r#"你是一位在华尔街工作了20年的资深基金经理，现在你在给一位聪明的Z世代（高中生/大学生）讲投资。

请分析目标：**{{ name }} ({{ symbol }})**
当前价格：${{ price }}
今日涨跌：{{ change }}{% if percent_change is defined %} ({{ percent_change }}%){% endif %}

**要求：**
1. 不要堆砌术语，要把复杂的商业逻辑用“人话”讲清楚。
2. 内容要有含金量（护城河、盈利模式、未来增长点）。
3. 必须使用 Markdown 格式，且严格按照以下四个板块输出：

# 🧠 商业模式解构 (怎么赚钱的？)
[这里深入浅出地解释它的核心业务，不要只抄简介，要讲它为什么牛/不牛]

# 📊 市场情绪与估值 (贵不贵？)
[结合今日涨跌，分析现在是大家都在抢，还是大家都在跑？简单提一下估值逻辑]

# 🚀 未来爆发点 vs 💣 潜在暴雷点
[列出1-2个最大的机会（AI？降息？）和最大的风险（竞争？政策？）]

# 👨‍🏫 Ryan 的最终结论
[给出一个明确的、带个人观点的总结。比如“短期观望，长期持有”或“现在就是赌场”]
"#;

/// Build the commentary prompt template
pub fn analysis_prompt() -> Result<LocalizedTemplate> {
    LocalizedTemplate::bilingual(ANALYSIS_PROMPT, ANALYSIS_EN, ANALYSIS_ZH)
}

/// Message returned when the provider has no price for the symbol
pub fn not_found_message(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Stock not found. Try the full English company name or the ticker symbol."
        }
        Language::Chinese => "找不到该股票，请尝试输入英文全名或代码",
    }
}

/// Message returned when the market-data provider could not be used
pub fn connection_failed_message(lang: Language) -> &'static str {
    match lang {
        Language::English => "server connection failed",
        Language::Chinese => "服务器连接失败",
    }
}

/// Text placed in `analysis` when the commentary could not be produced
pub fn commentary_failed_message(lang: Language, error: &str) -> String {
    match lang {
        Language::English => format!("AI thinking timed out: {error}"),
        Language::Chinese => format!("AI 思考超时: {error}"),
    }
}
