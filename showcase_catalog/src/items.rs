// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::swatch::{Swatch, swatch_for};

/// One immutable product record.
///
/// Records are `'static` and never mutated; consumers hold `&'static`
/// references handed out by [`crate::Catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    /// Stable identifier, unique within the catalog.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Collection tag the product belongs to.
    pub collection: &'static str,
    /// Long-form description shown in the detail panel.
    pub description: &'static str,
    /// Preformatted price label.
    pub price: &'static str,
    /// Color name; see [`CatalogItem::swatch`].
    pub color: &'static str,
    /// Case/strap material.
    pub material: &'static str,
    /// Image reference, relative to the host's asset root.
    pub image: &'static str,
}

impl CatalogItem {
    /// Swatch for this record's color name, falling back to the neutral swatch.
    #[must_use]
    pub fn swatch(&self) -> Swatch {
        swatch_for(self.color)
    }
}

/// The watch collection.
pub(crate) static WATCHES: [CatalogItem; 9] = [
    CatalogItem {
        id: "1",
        name: "クラシック シルバー",
        collection: "タイムレス",
        description: "エレガンスと精密さを兼ね備えたタイムレスなデザイン。研磨されたシルバーケースとミニマルな文字盤が、あらゆるシーンに映える洗練されたルックスを生み出します。",
        price: "¥45,000",
        color: "Silver",
        material: "ステンレススチール",
        image: "/products/watch-1.png",
    },
    CatalogItem {
        id: "2",
        name: "ローズゴールド エリート",
        collection: "リュクス",
        description: "細部まで丁寧に作り込まれたローズゴールドのタイムピース。温かみと洗練さを兼ね備え、モダンな美学とクラシックな魅力の完璧な融合を実現しています。",
        price: "¥68,000",
        color: "Rose Gold",
        material: "18Kローズゴールドプレーティング",
        image: "/products/watch-2.png",
    },
    CatalogItem {
        id: "3",
        name: "ミッドナイト ブラック",
        collection: "シャドウ",
        description: "大胆でミステリアスなミッドナイトブラック。オールブラックのデザインとさりげないアクセントが、控えめなラグジュアリーを愛する方に語りかけます。",
        price: "¥52,000",
        color: "Black",
        material: "PVDコーティングスチール",
        image: "/products/watch-3.png",
    },
    CatalogItem {
        id: "4",
        name: "オーシャン ブルー",
        collection: "マリン",
        description: "海の深さからインスピレーションを得たこのピースは、光を美しく捉える魅力的なブルーダイヤルを特徴としています。防水性能を備え、冒険の準備は万端です。",
        price: "¥58,000",
        color: "Blue",
        material: "チタニウム",
        image: "/products/watch-4.png",
    },
    CatalogItem {
        id: "5",
        name: "シャンパン ドリーム",
        collection: "リュクス",
        description: "このシャンパントーンのマスターピースで、あらゆる瞬間を祝福しましょう。温かみのあるゴールデンヒューが、日常に特別な輝きを添えます。",
        price: "¥72,000",
        color: "Champagne",
        material: "ゴールドプレーティング",
        image: "/products/watch-5.png",
    },
    CatalogItem {
        id: "6",
        name: "フォレスト グリーン",
        collection: "ネイチャー",
        description: "このアースグリーンのタイムピースで自然とつながりましょう。サステナブルな素材と洗練されたデザインが融合した、エコ意識の高いクリエーション。",
        price: "¥48,000",
        color: "Green",
        material: "リサイクルチタニウム",
        image: "/products/watch-6.png",
    },
    CatalogItem {
        id: "7",
        name: "パール ホワイト",
        collection: "タイムレス",
        description: "純粋でエレガントなパールホワイトは、シンプリシティの極みを体現しています。クリーンで明るい文字盤が、あらゆるスタイルを優雅に引き立てます。",
        price: "¥42,000",
        color: "White",
        material: "セラミック",
        image: "/products/watch-7.png",
    },
    CatalogItem {
        id: "8",
        name: "コッパー サンセット",
        collection: "ネイチャー",
        description: "温かみのあるコッパートーンが夕日の美しさを連想させます。このユニークなタイムピースが、自然の温もりと職人技の輝きを手元にお届けします。",
        price: "¥55,000",
        color: "Copper",
        material: "ブロンズ",
        image: "/products/watch-8.png",
    },
    CatalogItem {
        id: "9",
        name: "バーガンディ クラシック",
        collection: "ヘリテージ",
        description: "リッチなバーガンディレザーとヴィンテージインスパイアのデザインが出会う一品。伝統的な時計製造へのオマージュと、現代的な快適さと信頼性を兼ね備えています。",
        price: "¥49,000",
        color: "Burgundy",
        material: "ステンレススチール",
        image: "/products/watch-9.png",
    },
];

#[cfg(test)]
mod tests {
    use super::WATCHES;

    #[test]
    fn ids_are_unique() {
        for (i, a) in WATCHES.iter().enumerate() {
            for b in &WATCHES[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn every_record_has_a_known_swatch() {
        for item in &WATCHES {
            assert!(
                item.swatch().is_known(),
                "no swatch registered for color {:?}",
                item.color
            );
        }
    }
}
