//! Bundled SRD reference data

use crate::domain::value_objects::BudgetRow;

/// XP for a single creature of each CR
pub(super) const XP_BY_CR: [(u32, u32); 30] = [
    (1, 200),
    (2, 450),
    (3, 700),
    (4, 1_100),
    (5, 1_800),
    (6, 2_300),
    (7, 2_900),
    (8, 3_900),
    (9, 5_000),
    (10, 5_900),
    (11, 7_200),
    (12, 8_400),
    (13, 10_000),
    (14, 11_500),
    (15, 13_000),
    (16, 15_000),
    (17, 18_000),
    (18, 20_000),
    (19, 22_000),
    (20, 25_000),
    (21, 33_000),
    (22, 41_000),
    (23, 50_000),
    (24, 62_000),
    (25, 75_000),
    (26, 90_000),
    (27, 105_000),
    (28, 120_000),
    (29, 135_000),
    (30, 155_000),
];

/// XP budget per character by level (low, moderate, high)
pub(super) const XP_BUDGET_PER_LEVEL: [(u32, BudgetRow); 20] = [
    (1, BudgetRow::new(50, 75, 100)),
    (2, BudgetRow::new(100, 150, 200)),
    (3, BudgetRow::new(150, 225, 400)),
    (4, BudgetRow::new(250, 375, 500)),
    (5, BudgetRow::new(500, 750, 1_100)),
    (6, BudgetRow::new(600, 1_000, 1_400)),
    (7, BudgetRow::new(750, 1_300, 1_700)),
    (8, BudgetRow::new(1_000, 1_700, 2_100)),
    (9, BudgetRow::new(1_300, 2_000, 2_600)),
    (10, BudgetRow::new(1_600, 2_300, 3_100)),
    (11, BudgetRow::new(1_900, 2_900, 4_100)),
    (12, BudgetRow::new(2_200, 3_700, 4_700)),
    (13, BudgetRow::new(2_600, 4_200, 5_400)),
    (14, BudgetRow::new(2_900, 4_900, 6_200)),
    (15, BudgetRow::new(3_300, 5_400, 7_800)),
    (16, BudgetRow::new(3_800, 6_100, 9_800)),
    (17, BudgetRow::new(4_500, 7_200, 11_700)),
    (18, BudgetRow::new(5_000, 8_700, 14_200)),
    (19, BudgetRow::new(5_500, 10_700, 17_200)),
    (20, BudgetRow::new(6_400, 13_200, 22_000)),
];

/// Treasure by CR bucket, in disposition order:
/// incidental, using, personal, stash, trove, fortune, hoard
pub(super) const TREASURE_BY_BUCKET: [(u32, [&str; 7]); 10] = [
    (
        1,
        [
            "3d6 cp",
            "4d6 sp",
            "2d6 gp",
            "4d6 x 5 gp in mixed coins",
            "2d4 x 10 gp in coins and 1 common magic item",
            "2d6 x 25 gp in coins and gems and 1d2 common magic items",
            "4d6 x 25 gp in coins and art objects and 1 uncommon magic item",
        ],
    ),
    (
        4,
        [
            "4d6 sp",
            "3d6 gp",
            "4d6 gp and a trinket",
            "2d4 x 25 gp in mixed coins",
            "3d6 x 25 gp in coins and 1 uncommon magic item",
            "4d6 x 50 gp in coins and gems and 1d2 uncommon magic items",
            "6d6 x 50 gp in coins and art objects and 1d3 uncommon magic items",
        ],
    ),
    (
        7,
        [
            "2d6 gp",
            "4d6 gp",
            "2d4 x 10 gp",
            "4d6 x 25 gp in mixed coins",
            "2d4 x 100 gp in coins and 1 uncommon magic item",
            "4d6 x 100 gp in coins and gems and 1 rare magic item",
            "8d6 x 100 gp in coins and art objects and 1d2 rare magic items",
        ],
    ),
    (
        10,
        [
            "4d6 gp",
            "2d4 x 10 gp",
            "4d6 x 10 gp",
            "2d6 x 100 gp in mixed coins",
            "4d6 x 100 gp in coins and 1 rare magic item",
            "2d6 x 250 gp in coins and gems and 1d2 rare magic items",
            "4d6 x 250 gp in coins and art objects and 1d3 rare magic items",
        ],
    ),
    (
        13,
        [
            "2d4 x 10 gp",
            "4d6 x 10 gp",
            "2d6 x 25 gp",
            "4d6 x 100 gp in mixed coins",
            "2d6 x 250 gp in coins and 1 rare magic item",
            "4d6 x 250 gp in coins and gems and 1 very rare magic item",
            "8d6 x 250 gp in coins and art objects and 1d2 very rare magic items",
        ],
    ),
    (
        16,
        [
            "4d6 x 10 gp",
            "2d6 x 25 gp",
            "4d6 x 25 gp",
            "2d6 x 250 gp in mixed coins",
            "4d6 x 250 gp in coins and 1 very rare magic item",
            "2d6 x 1,000 gp in coins and gems and 1d2 very rare magic items",
            "4d6 x 1,000 gp in coins and art objects and 1d3 very rare magic items",
        ],
    ),
    (
        19,
        [
            "2d6 x 25 gp",
            "4d6 x 25 gp",
            "2d6 x 50 gp",
            "4d6 x 250 gp in mixed coins",
            "2d6 x 1,000 gp in coins and 1 very rare magic item",
            "4d6 x 1,000 gp in coins and gems and 1 legendary magic item",
            "8d6 x 1,000 gp in coins and art objects and 1d2 legendary magic items",
        ],
    ),
    (
        22,
        [
            "4d6 x 25 gp",
            "2d6 x 50 gp",
            "4d6 x 50 gp",
            "2d6 x 1,000 gp in mixed coins",
            "4d6 x 1,000 gp in coins and 1 legendary magic item",
            "2d6 x 5,000 gp in coins and gems and 1d2 legendary magic items",
            "4d6 x 5,000 gp in coins and art objects and 1d3 legendary magic items",
        ],
    ),
    (
        25,
        [
            "2d6 x 50 gp",
            "4d6 x 50 gp",
            "2d6 x 100 gp",
            "4d6 x 1,000 gp in mixed coins",
            "2d6 x 5,000 gp in coins and 1d2 legendary magic items",
            "4d6 x 5,000 gp in coins and gems and 1d3 legendary magic items",
            "8d6 x 5,000 gp in coins and art objects and 1d4 legendary magic items",
        ],
    ),
    (
        28,
        [
            "4d6 x 50 gp",
            "2d6 x 100 gp",
            "4d6 x 100 gp",
            "2d6 x 5,000 gp in mixed coins",
            "4d6 x 5,000 gp in coins and 1d3 legendary magic items",
            "2d6 x 25,000 gp in coins and gems and 1d4 legendary magic items",
            "4d6 x 25,000 gp in coins and art objects and 1d6 legendary magic items",
        ],
    ),
];
