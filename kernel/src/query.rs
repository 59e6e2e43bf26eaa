//! 一覧取得の共通パイプライン。
//! フィルタ → 検索 → 単一キーソート → ページネーション の順に適用する。
//! どのステップも読み込んだスナップショットに対する純粋な操作で、
//! 総件数はページネーション前に確定する。

use std::cmp::Ordering;

use crate::model::list::{PaginatedList, Pagination, SortOrder};

/// 検索語によるケースインセンシティブな部分一致。
/// 対象フィールドはエンティティごとに列挙されたものに限る。
pub fn matches_term(term: &str, fields: &[&str]) -> bool {
    let term = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// フィルタ済みのコレクションをソートしてページを切り出す。
/// `compare` は昇順の比較を返し、降順は結果を反転して得る。
/// 範囲外のページは空のスライスになる（エラーではない）。
pub fn sort_and_paginate<T>(
    mut items: Vec<T>,
    compare: impl Fn(&T, &T) -> Ordering,
    order: SortOrder,
    pagination: Pagination,
) -> PaginatedList<T> {
    items.sort_by(|a, b| {
        let ordering = compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    let total = items.len();
    let items: Vec<T> = items
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.page_size as usize)
        .collect();

    PaginatedList {
        total,
        page: pagination.page,
        page_size: pagination.page_size,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_term("board", &["Board Room", "3F East"]));
        assert!(matches_term("BOARD", &["Main board room"]));
        assert!(!matches_term("board", &["Huddle Space", "2F West"]));
    }

    #[test]
    fn second_page_of_25_items_returns_offset_10_to_19() {
        let items: Vec<u32> = (0..25).collect();
        let result = sort_and_paginate(
            items,
            |a, b| a.cmp(b),
            SortOrder::Asc,
            Pagination {
                page: 2,
                page_size: 10,
            },
        );
        assert_eq!(result.total, 25);
        assert_eq!(result.items, (10..20).collect::<Vec<u32>>());
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let items: Vec<u32> = (0..5).collect();
        let result = sort_and_paginate(
            items,
            |a, b| a.cmp(b),
            SortOrder::Asc,
            Pagination {
                page: 3,
                page_size: 10,
            },
        );
        assert_eq!(result.total, 5);
        assert!(result.items.is_empty());
    }

    #[test]
    fn descending_reverses_ascending_order() {
        let pagination = Pagination {
            page: 1,
            page_size: 10,
        };
        let asc = sort_and_paginate(vec![12, 4, 8], |a, b| a.cmp(b), SortOrder::Asc, pagination);
        let desc = sort_and_paginate(vec![12, 4, 8], |a, b| a.cmp(b), SortOrder::Desc, pagination);
        assert_eq!(asc.items, vec![4, 8, 12]);
        assert_eq!(
            desc.items,
            asc.items.into_iter().rev().collect::<Vec<u32>>()
        );
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let items = vec![("b", 1), ("a", 2), ("b", 3)];
        let result = sort_and_paginate(
            items,
            |a, b| a.0.cmp(b.0),
            SortOrder::Asc,
            Pagination {
                page: 1,
                page_size: 10,
            },
        );
        assert_eq!(result.items, vec![("a", 2), ("b", 1), ("b", 3)]);
    }
}
