//! リポジトリテスト用の JSON フィクスチャ。
//! tempfile のディレクトリに書き出して JsonDataStore を向ける。

use tempfile::TempDir;

use crate::datastore::JsonDataStore;

pub(crate) fn datastore_with(files: &[(&str, &str)]) -> (TempDir, JsonDataStore) {
    let dir = TempDir::new().expect("failed to create temp dir");
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).expect("failed to write fixture");
    }
    let store = JsonDataStore::new(dir.path());
    (dir, store)
}

pub(crate) const ROOMS_JSON: &str = r#"{
  "rooms": [
    {
      "id": "room-1",
      "name": "Board Room",
      "capacity": 12,
      "location": "3F East",
      "features": ["projector", "whiteboard"],
      "hourlyRate": 50.0,
      "availability": {
        "monday": ["09:00-18:00"],
        "tuesday": ["09:00-18:00"]
      },
      "image": "/images/rooms/board.jpg",
      "status": "available"
    },
    {
      "id": "room-2",
      "name": "Huddle Space",
      "capacity": 4,
      "location": "2F West",
      "features": ["tv"],
      "hourlyRate": 15.0,
      "availability": {},
      "image": "/images/rooms/huddle.jpg",
      "status": "maintenance"
    },
    {
      "id": "room-3",
      "name": "Boardwalk Lounge",
      "capacity": 20,
      "location": "1F South",
      "features": [],
      "hourlyRate": 80.0,
      "availability": {},
      "image": "/images/rooms/lounge.jpg",
      "status": "available"
    }
  ]
}"#;

pub(crate) const BOOKINGS_JSON: &str = r#"{
  "bookings": [
    {
      "id": "booking-1",
      "roomId": "room-1",
      "userId": "user-1",
      "title": "Quarterly Review",
      "description": "Q1 numbers walkthrough",
      "startTime": "2025-04-01T14:00",
      "endTime": "2025-04-01T16:00",
      "attendees": ["user-2"],
      "resources": ["resource-1"],
      "status": "confirmed",
      "createdAt": "2025-03-20T10:00",
      "updatedAt": "2025-03-20T10:00",
      "recurring": false,
      "recurrencePattern": null,
      "recurrenceEndDate": null,
      "notes": "Bring the printed decks",
      "cancellationReason": null
    },
    {
      "id": "booking-2",
      "roomId": "room-1",
      "userId": "user-2",
      "title": "Design Sync",
      "description": "weekly sync",
      "startTime": "2025-04-01T15:00",
      "endTime": "2025-04-01T17:00",
      "attendees": [],
      "resources": [],
      "status": "pending",
      "createdAt": "2025-03-21T09:00",
      "updatedAt": "2025-03-21T09:00",
      "recurring": false,
      "recurrencePattern": null,
      "recurrenceEndDate": null,
      "notes": "",
      "cancellationReason": null
    },
    {
      "id": "booking-3",
      "roomId": "room-3",
      "userId": "user-1",
      "title": "All Hands",
      "description": "company wide",
      "startTime": "2025-04-02T09:00",
      "endTime": "2025-04-02T10:00",
      "attendees": ["user-2", "user-3"],
      "resources": [],
      "status": "confirmed",
      "createdAt": "2025-03-22T08:00",
      "updatedAt": "2025-03-22T08:00",
      "recurring": true,
      "recurrencePattern": "weekly",
      "recurrenceEndDate": "2025-06-30T00:00",
      "notes": "",
      "cancellationReason": null
    }
  ]
}"#;

pub(crate) const RESOURCES_JSON: &str = r#"{
  "resources": [
    {
      "id": "resource-1",
      "name": "Projector",
      "type": "equipment",
      "description": "4K projector",
      "quantity": 3,
      "status": "available",
      "location": "Storage 3F",
      "lastMaintenance": "2025-01-15T00:00",
      "nextMaintenance": "2025-07-15T00:00",
      "image": "/images/resources/projector.jpg",
      "assignable": true,
      "leadTime": null,
      "provider": null,
      "contactPerson": null,
      "contactEmail": null,
      "cost": null,
      "costUnit": null,
      "notes": null
    },
    {
      "id": "resource-2",
      "name": "Catering",
      "type": "service",
      "description": "Lunch catering service",
      "quantity": null,
      "status": "maintenance",
      "location": null,
      "lastMaintenance": null,
      "nextMaintenance": null,
      "image": "/images/resources/catering.jpg",
      "assignable": true,
      "leadTime": "48h",
      "provider": "Tasty Co.",
      "contactPerson": "Pat Doe",
      "contactEmail": "pat@tasty.example",
      "cost": 12.5,
      "costUnit": "per head",
      "notes": "order two days ahead"
    },
    {
      "id": "resource-3",
      "name": "Video Conference Kit",
      "type": "equipment",
      "description": "camera and mics",
      "quantity": 1,
      "status": "available",
      "location": "Storage 2F",
      "lastMaintenance": null,
      "nextMaintenance": null,
      "image": "/images/resources/vc-kit.jpg",
      "assignable": false,
      "leadTime": null,
      "provider": null,
      "contactPerson": null,
      "contactEmail": null,
      "cost": null,
      "costUnit": null,
      "notes": "fixed install, cannot be moved"
    }
  ]
}"#;

pub(crate) const USERS_JSON: &str = r#"{
  "users": [
    {
      "id": "user-1",
      "name": "Alice Yamada",
      "email": "alice@example.com",
      "role": "admin",
      "department": "Engineering",
      "position": "Platform Lead",
      "phone": "000-1111-2222",
      "profileImage": "/images/users/alice.jpg",
      "dateCreated": "2024-01-10T00:00",
      "lastLogin": "2025-03-30T08:00",
      "status": "active"
    },
    {
      "id": "user-2",
      "name": "Bob Tanaka",
      "email": "bob@example.com",
      "role": "user",
      "department": "Sales",
      "position": "Account Executive",
      "phone": "000-3333-4444",
      "profileImage": "/images/users/bob.jpg",
      "dateCreated": "2024-02-05T00:00",
      "lastLogin": "2025-03-28T17:30",
      "status": "inactive"
    },
    {
      "id": "user-3",
      "name": "Carol Suzuki",
      "email": "carol@example.com",
      "role": "manager",
      "department": "Engineering",
      "position": "Engineering Manager",
      "phone": "000-5555-6666",
      "profileImage": "/images/users/carol.jpg",
      "dateCreated": "2024-03-01T00:00",
      "lastLogin": "2025-03-29T12:00",
      "status": "active"
    }
  ]
}"#;
