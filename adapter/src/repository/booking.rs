use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{query::BookingListQuery, Booking},
    id::{BookingId, RoomId},
    list::PaginatedList,
    time::TimeWindow,
};
use kernel::query::{matches_term, sort_and_paginate};
use kernel::repository::booking::BookingRepository;
use shared::error::AppResult;

use crate::datastore::{
    model::{booking::BookingsDocument, room::RoomsDocument},
    JsonDataStore,
};

#[derive(new)]
pub struct BookingRepositoryImpl {
    store: JsonDataStore,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_all(&self, query: BookingListQuery) -> AppResult<PaginatedList<Booking>> {
        let BookingListQuery {
            filter,
            search_term,
            sort_field,
            sort_order,
            pagination,
        } = query;

        let bookings: Vec<Booking> = BookingsDocument::load(&self.store)
            .await?
            .into_iter()
            .filter(|booking| filter.matches(booking))
            .filter(|booking| {
                search_term
                    .as_deref()
                    .map_or(true, |term| matches_term(term, &booking.search_fields()))
            })
            .collect();

        Ok(sort_and_paginate(
            bookings,
            |a, b| sort_field.compare(a, b),
            sort_order,
            pagination,
        ))
    }

    async fn find_by_id(&self, booking_id: &BookingId) -> AppResult<Option<Booking>> {
        let bookings = BookingsDocument::load(&self.store).await?;
        Ok(bookings.into_iter().find(|booking| booking.id == *booking_id))
    }

    async fn check_room_availability(
        &self,
        room_id: &RoomId,
        window: &TimeWindow,
        exclude_booking: Option<&BookingId>,
    ) -> AppResult<bool> {
        // 部屋が見つからない・予約を受け付けない状態ならフェイルクローズ
        let rooms = RoomsDocument::load(&self.store).await?;
        let Some(room) = rooms.into_iter().find(|room| room.id == *room_id) else {
            return Ok(false);
        };
        if !room.is_bookable() {
            return Ok(false);
        }

        let bookings = BookingsDocument::load(&self.store).await?;
        let conflict = bookings
            .iter()
            .filter(|booking| booking.room_id == *room_id && booking.is_confirmed())
            .filter(|booking| exclude_booking.map_or(true, |id| booking.id != *id))
            .any(|booking| booking.conflicts_with(window));

        Ok(!conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures::{datastore_with, BOOKINGS_JSON, ROOMS_JSON};
    use kernel::model::{
        booking::query::{BookingFilter, BookingSortField},
        booking::BookingStatus,
        id::UserId,
        list::{Pagination, SortOrder},
        time::Timestamp,
    };

    fn store() -> (tempfile::TempDir, JsonDataStore) {
        datastore_with(&[("rooms.json", ROOMS_JSON), ("bookings.json", BOOKINGS_JSON)])
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(Timestamp::new(start), Timestamp::new(end)).unwrap()
    }

    fn query(filter: BookingFilter) -> BookingListQuery {
        BookingListQuery {
            filter,
            search_term: None,
            sort_field: BookingSortField::StartTime,
            sort_order: SortOrder::Asc,
            pagination: Pagination {
                page: 1,
                page_size: 10,
            },
        }
    }

    #[tokio::test]
    async fn overlapping_window_is_not_available() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);

        // booking-1 (confirmed) が 14:00-16:00 を押さえている
        let available = repo
            .check_room_availability(
                &RoomId::new("room-1"),
                &window("2025-04-01T15:00", "2025-04-01T15:30"),
                None,
            )
            .await?;
        assert!(!available);
        Ok(())
    }

    #[tokio::test]
    async fn touching_window_is_available() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);

        // 既存予約の終了時刻ちょうどから始まる予約は可能
        let available = repo
            .check_room_availability(
                &RoomId::new("room-1"),
                &window("2025-04-01T16:00", "2025-04-01T17:00"),
                None,
            )
            .await?;
        assert!(available);
        Ok(())
    }

    #[tokio::test]
    async fn pending_bookings_do_not_block() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);

        // booking-2 (pending) は 15:00-17:00 だが競合判定には入らない
        let available = repo
            .check_room_availability(
                &RoomId::new("room-1"),
                &window("2025-04-01T16:30", "2025-04-01T17:30"),
                None,
            )
            .await?;
        assert!(available);
        Ok(())
    }

    #[tokio::test]
    async fn excluding_own_booking_allows_identical_window() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);

        let own_window = window("2025-04-01T14:00", "2025-04-01T16:00");
        let room_id = RoomId::new("room-1");

        let without_exclusion = repo
            .check_room_availability(&room_id, &own_window, None)
            .await?;
        assert!(!without_exclusion);

        let with_exclusion = repo
            .check_room_availability(&room_id, &own_window, Some(&BookingId::new("booking-1")))
            .await?;
        assert!(with_exclusion);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_or_unbookable_room_fails_closed() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);
        let free_window = window("2025-04-05T09:00", "2025-04-05T10:00");

        let unknown = repo
            .check_room_availability(&RoomId::new("room-99"), &free_window, None)
            .await?;
        assert!(!unknown);

        // room-2 は maintenance 中
        let maintenance = repo
            .check_room_availability(&RoomId::new("room-2"), &free_window, None)
            .await?;
        assert!(!maintenance);
        Ok(())
    }

    #[tokio::test]
    async fn user_filter_matches_attendees_too() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);

        // user-2 は booking-1/3 の参加者、booking-2 の作成者
        let result = repo
            .find_all(query(BookingFilter {
                user_id: Some(UserId::new("user-2")),
                ..Default::default()
            }))
            .await?;
        assert_eq!(result.total, 3);
        Ok(())
    }

    #[tokio::test]
    async fn date_bounds_and_status_combine_with_and() -> AppResult<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);

        let result = repo
            .find_all(query(BookingFilter {
                status: Some(BookingStatus::Confirmed),
                start_date: Some(Timestamp::new("2025-04-02T00:00")),
                ..Default::default()
            }))
            .await?;
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id.as_str(), "booking-3");
        Ok(())
    }

    #[tokio::test]
    async fn search_scans_title_description_and_notes() -> AppResult<()> {
        let (_dir, store) = store();
        let repo = BookingRepositoryImpl::new(store);

        let result = repo
            .find_all(BookingListQuery {
                filter: BookingFilter::default(),
                search_term: Some("printed DECKS".into()),
                sort_field: BookingSortField::StartTime,
                sort_order: SortOrder::Asc,
                pagination: Pagination {
                    page: 1,
                    page_size: 10,
                },
            })
            .await?;
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].id.as_str(), "booking-1");
        Ok(())
    }
}
