use crate::domain::ports::market_data::{
    HistoryRange, MarketData, MarketDataError, NewsItem, OhlcBar, RawQuote,
};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

/// Yahoo Finance adapter: v10 quoteSummary for fundamentals, v8 chart for
/// price history, v1 search for news. None of the endpoints require auth.
pub struct YahooMarketData {
    client: reqwest::Client,
}

impl YahooMarketData {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(
                    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                     AppleWebKit/537.36 (KHTML, like Gecko) \
                     Chrome/120.0.0.0 Safari/537.36",
                )
                .build()
                .unwrap_or_default(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        ticker: &str,
    ) -> Result<T, MarketDataError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound(ticker.to_string()));
        }
        if !resp.status().is_success() {
            return Err(MarketDataError::Network(format!(
                "Yahoo API returned {} for {ticker}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| MarketDataError::Parse(e.to_string()))
    }
}

impl Default for YahooMarketData {
    fn default() -> Self {
        Self::new()
    }
}

/// Yahoo wraps every numeric field as `{"raw": 1.23, "fmt": "1.23"}`.
#[derive(Debug, serde::Deserialize)]
struct RawNum {
    #[serde(default)]
    raw: Option<f64>,
}

fn num(field: Option<RawNum>) -> Option<f64> {
    field.and_then(|n| n.raw)
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    quote_summary: SummaryResult,
}

#[derive(Debug, serde::Deserialize)]
struct SummaryResult {
    result: Option<Vec<SummaryModules>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SummaryModules {
    #[serde(default)]
    price: Option<PriceModule>,
    #[serde(default)]
    summary_detail: Option<SummaryDetail>,
    #[serde(default)]
    default_key_statistics: Option<KeyStatistics>,
    #[serde(default)]
    asset_profile: Option<AssetProfile>,
}

#[derive(Debug, serde::Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PriceModule {
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    regular_market_price: Option<RawNum>,
    #[serde(default)]
    regular_market_previous_close: Option<RawNum>,
    #[serde(default)]
    market_cap: Option<RawNum>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDetail {
    // Yahoo capitalizes the acronym: trailingPE, not trailingPe.
    #[serde(default, rename = "trailingPE")]
    trailing_pe: Option<RawNum>,
    #[serde(default, rename = "forwardPE")]
    forward_pe: Option<RawNum>,
    #[serde(default)]
    dividend_yield: Option<RawNum>,
    #[serde(default)]
    fifty_two_week_high: Option<RawNum>,
    #[serde(default)]
    fifty_two_week_low: Option<RawNum>,
    #[serde(default)]
    previous_close: Option<RawNum>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyStatistics {
    #[serde(default)]
    trailing_eps: Option<RawNum>,
    #[serde(default)]
    book_value: Option<RawNum>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetProfile {
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    long_business_summary: Option<String>,
}

fn raw_quote_from(modules: SummaryModules) -> RawQuote {
    let price = modules.price.unwrap_or_default();
    let detail = modules.summary_detail;
    let stats = modules.default_key_statistics;
    let profile = modules.asset_profile;

    let (trailing_pe, forward_pe, dividend_yield, high_52w, low_52w, prev_close_detail) =
        match detail {
            Some(d) => (
                num(d.trailing_pe),
                num(d.forward_pe),
                num(d.dividend_yield),
                num(d.fifty_two_week_high),
                num(d.fifty_two_week_low),
                num(d.previous_close),
            ),
            None => (None, None, None, None, None, None),
        };
    let (eps, book_value) = match stats {
        Some(s) => (num(s.trailing_eps), num(s.book_value)),
        None => (None, None),
    };
    let (sector, summary) = match profile {
        Some(p) => (p.sector, p.long_business_summary),
        None => (None, None),
    };

    RawQuote {
        name: price.short_name.or(price.long_name),
        price: num(price.regular_market_price),
        previous_close: num(price.regular_market_previous_close).or(prev_close_detail),
        eps,
        book_value,
        trailing_pe,
        forward_pe,
        market_cap: num(price.market_cap),
        sector,
        dividend_yield,
        fifty_two_week_high: high_52w,
        fifty_two_week_low: low_52w,
        summary,
    }
}

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, serde::Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, serde::Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, serde::Deserialize, Default)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

/// Bar granularity for each lookback window.
fn interval(range: HistoryRange) -> &'static str {
    match range {
        HistoryRange::Day => "5m",
        HistoryRange::Week => "30m",
        HistoryRange::Month | HistoryRange::Quarter | HistoryRange::HalfYear => "1d",
        HistoryRange::Year => "1d",
        HistoryRange::FiveYears => "1wk",
    }
}

fn bars_from(data: ChartData) -> Vec<OhlcBar> {
    let quote = data.indicators.quote.into_iter().next().unwrap_or_default();
    let mut bars = Vec::with_capacity(data.timestamp.len());
    for (i, ts) in data.timestamp.iter().enumerate() {
        // Holiday/halted periods come back as nulls; drop them.
        let (open, high, low, close) = match (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        ) {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => continue,
        };
        let timestamp = match Utc.timestamp_opt(*ts, 0).single() {
            Some(t) => t,
            None => continue,
        };
        bars.push(OhlcBar {
            timestamp,
            open,
            high,
            low,
            close,
            volume: quote.volume.get(i).copied().flatten(),
        });
    }
    bars
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news: Vec<NewsDto>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsDto {
    title: String,
    link: String,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    provider_publish_time: Option<i64>,
}

#[async_trait]
impl MarketData for YahooMarketData {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    async fn quote(&self, ticker: &str) -> Result<RawQuote, MarketDataError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{ticker}\
             ?modules=price,summaryDetail,defaultKeyStatistics,assetProfile"
        );
        let data: SummaryResponse = self.get_json(&url, ticker).await?;

        if let Some(err) = data.quote_summary.error {
            return Err(MarketDataError::NotFound(format!("{ticker}: {err}")));
        }

        let modules = data
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| MarketDataError::NotFound(ticker.to_string()))?;

        Ok(raw_quote_from(modules))
    }

    async fn history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<OhlcBar>, MarketDataError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{ticker}\
             ?range={range}&interval={}",
            interval(range)
        );
        let data: ChartResponse = self.get_json(&url, ticker).await?;

        if let Some(err) = data.chart.error {
            return Err(MarketDataError::NotFound(format!("{ticker}: {err}")));
        }

        let chart = data
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| MarketDataError::NotFound(ticker.to_string()))?;

        Ok(bars_from(chart))
    }

    async fn news(&self, ticker: &str) -> Result<Vec<NewsItem>, MarketDataError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v1/finance/search\
             ?q={ticker}&newsCount=10&quotesCount=0"
        );
        let data: SearchResponse = self.get_json(&url, ticker).await?;

        Ok(data
            .news
            .into_iter()
            .map(|n| NewsItem {
                title: n.title,
                link: n.link,
                publisher: n.publisher,
                published_at: n
                    .provider_publish_time
                    .and_then(|ts| Utc.timestamp_opt(ts, 0).single()),
            })
            .collect())
    }
}
