//! Reference itineraries, one per supported layout.

/// Confirmation-email layout: three flights, the last one at fictional
/// airports and without a seat line.
pub const EMAIL: &str = "旅程1
2025年9月20日（土）　JAL511便
東京(羽田)10:30発        札幌(新千歳)12:05着
座席：クラス J 座席番号：15H

旅程2
2025年9月23日（火）　JAL528便
札幌(新千歳)21:15発        東京(羽田)22:55着
座席：クラス J 座席番号：8D

旅程3
2025年10月1日（水）　JAL999便
架空空港A(テスト)07:00発        架空空港B(AAA)09:10着
";

/// Booking-page layout: two flights, one item per line.
pub const HOMEPAGE: &str = "予約番号：
FNMGMS
購入期限：
-
購入済み
(JALオンライン)
2026年2月10日（火）
運賃：
ビジネスフレックス
11:55東京 (羽田)
14:50 沖縄 (那覇)
クラス： クラス J
便名：JAL915
座席： 指定済み
2026年2月13日（金）
運賃：
ビジネスフレックス
18:20沖縄 (那覇)
20:30 東京 (羽田)
クラス： クラス J
便名：JAL916
座席： 指定済み
";
