pub const APP_NAME: &str = "量化交易后台管理系统";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Dashboard,
    MarketData,
    TransactionData,
    LongTermTags,
    Settings,
}

pub const NAVIGATION_ITEMS: [PageKind; 5] = [
    PageKind::Dashboard,
    PageKind::MarketData,
    PageKind::TransactionData,
    PageKind::LongTermTags,
    PageKind::Settings,
];

pub const DEFAULT_PAGE: PageKind = PageKind::MarketData;

impl PageKind {
    pub fn label(self) -> &'static str {
        match self {
            PageKind::Dashboard => "仪表盘",
            PageKind::MarketData => "市场行情基础数据",
            PageKind::TransactionData => "交易明细表",
            PageKind::LongTermTags => "长期标签表",
            PageKind::Settings => "设置",
        }
    }
}
