use strum::EnumString;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    /// 1 始まりのページ番号から先頭オフセットを計算する
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.page_size as usize
    }
}

/// フィルタ適用後の総件数と、要求ページ分のスライス
#[derive(Debug)]
pub struct PaginatedList<T> {
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<T>,
}

impl<T> PaginatedList<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedList<U> {
        let PaginatedList {
            total,
            page,
            page_size,
            items,
        } = self;
        PaginatedList {
            total,
            page,
            page_size,
            items: items.into_iter().map(f).collect(),
        }
    }
}
