use proptest::prelude::*;
use tripsettle_domain::{
    BalanceCalculator, Bill, BillItem, Member, MemberId, Money, PaymentEntry, SETTLEMENT_SLACK,
    SettlementOptimizer, SettlementReportBuilder, UserBalance,
};

const NAMES: [&str; 10] = ["m0", "m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9"];

fn members(count: usize) -> Vec<Member> {
    NAMES[..count]
        .iter()
        .map(|id| Member::new(*id, id.to_uppercase()))
        .collect()
}

fn consumers_from_mask(mask: u16, member_count: usize) -> Vec<&'static str> {
    let picked: Vec<&'static str> = (0..member_count)
        .filter(|idx| mask & (1 << idx) != 0)
        .map(|idx| NAMES[idx])
        .collect();
    if picked.is_empty() {
        vec![NAMES[0]]
    } else {
        picked
    }
}

fn build_bills(member_count: usize, specs: &[(i64, u16, usize, usize)]) -> Vec<Bill> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, &(price, mask, payer, second_payer))| {
            let price = Money::from_cents(price);
            let half = Money::from_cents(price.cents() / 2);
            Bill::new(
                format!("bill-{idx}"),
                vec![BillItem::new(
                    format!("item-{idx}"),
                    price,
                    consumers_from_mask(mask, member_count),
                )],
                vec![
                    PaymentEntry::new(NAMES[payer % member_count], price - half),
                    PaymentEntry::new(NAMES[second_payer % member_count], half),
                ],
            )
        })
        .collect()
}

fn balanced_nets(raw: &[i64]) -> Vec<UserBalance> {
    let mut nets: Vec<i64> = raw.iter().map(|amount| amount * 10).collect();
    let total: i64 = nets.iter().sum();
    nets.push(-total);
    nets.iter()
        .enumerate()
        .map(|(idx, net)| UserBalance {
            net_balance: Money::from_cents(*net),
            ..UserBalance::zero(MemberId(format!("p{idx}")))
        })
        .collect()
}

proptest! {
    #[test]
    fn net_total_matches_paid_minus_owed(
        member_count in 2usize..=10,
        specs in prop::collection::vec((0i64..=50_000, 1u16..1024, 0usize..10, 0usize..10), 0..=12),
    ) {
        let members = members(member_count);
        let bills = build_bills(member_count, &specs);

        let balances = BalanceCalculator
            .calculate_user_balances(&bills, &members)
            .expect("balances should fit");

        let paid: Money = balances.iter().map(|b| b.total_paid).sum();
        let owed: Money = balances.iter().map(|b| b.total_owed).sum();
        let net: Money = balances.iter().map(|b| b.net_balance).sum();
        prop_assert_eq!(net, paid - owed);
    }

    #[test]
    fn settlements_are_well_formed_and_bounded(
        member_count in 2usize..=10,
        specs in prop::collection::vec((0i64..=50_000, 1u16..1024, 0usize..10, 0usize..10), 1..=12),
    ) {
        let members = members(member_count);
        let bills = build_bills(member_count, &specs);

        let report = SettlementReportBuilder
            .generate_settlement_report(&bills, &members)
            .expect("non-empty bills always produce a report");

        for settlement in &report.settlements {
            prop_assert_ne!(&settlement.from, &settlement.to);
            prop_assert!(settlement.amount > Money::ZERO);
        }
        let counts = SettlementOptimizer.count_participants(&report.balances);
        prop_assert!(report.settlements.len() <= counts.max_transactions());
        prop_assert_eq!(
            report.summary.max_transactions_without_optimisation,
            counts.max_transactions()
        );

        let settled: Money = report.settlements.iter().map(|s| s.amount).sum();
        let outstanding_debt: Money = report
            .balances
            .iter()
            .filter(|b| b.net_balance < Money::ZERO)
            .map(|b| b.net_balance.abs())
            .sum();
        prop_assert!(settled <= outstanding_debt);
    }

    #[test]
    fn report_generation_is_idempotent(
        member_count in 2usize..=10,
        specs in prop::collection::vec((0i64..=50_000, 1u16..1024, 0usize..10, 0usize..10), 1..=8),
    ) {
        let members = members(member_count);
        let bills = build_bills(member_count, &specs);

        let first = SettlementReportBuilder.generate_settlement_report(&bills, &members);
        let second = SettlementReportBuilder.generate_settlement_report(&bills, &members);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn balanced_nets_settle_to_zero(
        raw in prop::collection::vec(-5_000i64..=5_000, 1..=9),
    ) {
        let balances = balanced_nets(&raw);

        let settlements = SettlementOptimizer.optimise_settlements(&balances);
        let remaining = SettlementOptimizer.apply_settlements(&balances, &settlements);

        for (member, net) in remaining {
            prop_assert!(net.abs() <= SETTLEMENT_SLACK, "{} left with {}", member, net);
        }
        let counts = SettlementOptimizer.count_participants(&balances);
        prop_assert!(settlements.len() <= counts.max_transactions());
        // Greedy matching advances at least one cursor per payment.
        prop_assert!(settlements.len() < (counts.creditors + counts.debtors).max(1));
    }

    #[test]
    fn even_splits_leave_nothing_outstanding(
        member_count in 2usize..=10,
        shares in prop::collection::vec((1i64..=5_000, 1u16..1024, 0usize..10), 1..=10),
    ) {
        let members = members(member_count);
        let bills: Vec<Bill> = shares
            .iter()
            .enumerate()
            .map(|(idx, &(share, mask, payer))| {
                let consumers = consumers_from_mask(mask, member_count);
                let price = Money::from_cents(share * 10 * consumers.len() as i64);
                Bill::new(
                    format!("bill-{idx}"),
                    vec![BillItem::new("even", price, consumers)],
                    vec![PaymentEntry::new(NAMES[payer % member_count], price)],
                )
            })
            .collect();

        let report = SettlementReportBuilder
            .generate_settlement_report(&bills, &members)
            .expect("non-empty bills always produce a report");

        let net: Money = report.balances.iter().map(|b| b.net_balance).sum();
        prop_assert_eq!(net, Money::ZERO);
        prop_assert_eq!(report.residual_imbalance, Money::ZERO);
    }
}

#[test]
fn ten_members_across_overlapping_bills() {
    let members = members(10);
    let bills = vec![
        Bill::new(
            "cabin",
            vec![BillItem::new(
                "Cabin",
                Money::from_cents(10_000),
                ["m0", "m1", "m2", "m3", "m4", "m5"],
            )],
            vec![PaymentEntry::new("m0", Money::from_cents(10_000))],
        ),
        Bill::new(
            "boat",
            vec![BillItem::new(
                "Boat tour",
                Money::from_cents(7_000),
                ["m3", "m4", "m5", "m6", "m7", "m8", "m9"],
            )],
            vec![
                PaymentEntry::new("m3", Money::from_cents(4_000)),
                PaymentEntry::new("m7", Money::from_cents(3_000)),
            ],
        ),
        Bill::new(
            "market",
            vec![
                BillItem::new("Cheese", Money::from_cents(2_500), ["m1", "m2", "m8"]),
                BillItem::new("Bread", Money::from_cents(1_200), ["m8", "m9"]),
            ],
            vec![PaymentEntry::new("m8", Money::from_cents(3_700))],
        ),
        Bill::new(
            "fuel",
            vec![BillItem::new(
                "Fuel",
                Money::from_cents(5_555),
                ["m0", "m4", "m6", "m9"],
            )],
            vec![PaymentEntry::new("m6", Money::from_cents(5_555))],
        ),
        Bill::new(
            "farewell",
            vec![
                BillItem::new("Snacks", Money::from_cents(999), NAMES),
                BillItem::new("Wine", Money::from_cents(3_000), ["m2", "m5"])
                    .with_cost_per_consumer(Money::from_cents(1_500)),
            ],
            vec![PaymentEntry::new("m5", Money::from_cents(3_999))],
        ),
    ];

    let report = SettlementReportBuilder
        .generate_settlement_report(&bills, &members)
        .expect("report should build");

    let nets: Vec<i64> = report.balances.iter().map(|b| b.net_balance.cents()).collect();
    assert_eq!(
        nets,
        vec![6844, -2600, -4100, 1233, -4156, -268, 3066, 1900, 1167, -3089]
    );

    let net_total: i64 = nets.iter().sum();
    assert!(net_total.abs() <= 10, "net total {net_total} drifted");

    let counts = SettlementOptimizer.count_participants(&report.balances);
    assert_eq!((counts.creditors, counts.debtors), (5, 5));
    assert!(report.settlements.len() <= counts.max_transactions());
    assert_eq!(report.summary.max_transactions_without_optimisation, 25);
    assert!(report.residual_imbalance <= Money::from_cents(10));
    assert_eq!(report.total_expenses, Money::from_cents(30_254));
}
