//! 階層的ビルダー
//!
//! ピザの種類ごとに専用のビルダーを持たせ、トッピングの追加といった共通処理は
//! [`PizzaBuilder`] トレイトに一度だけ書く。
//!
//! - 共通メソッドは `Self` を返すので、チェーンの途中で具象ビルダーの型が失われない
//! - 具象ビルダーは [`PizzaBuilder::base_mut`] で共通の組み立て状態を渡すだけ
//! - `build` の戻り値は関連型 [`PizzaBuilder::Output`] で具象ピザ型に絞られる
//!
//! ```
//! use construction_patterns::pizza::{Calzone, NyPizza, PizzaBuilder, Size, Topping};
//!
//! let pizza = NyPizza::builder(Size::Small)
//!     .add_topping(Topping::Sausage)
//!     .add_topping(Topping::Onion)
//!     .build();
//! let calzone = Calzone::builder()
//!     .add_topping(Topping::Ham)
//!     .with_sauce_inside()
//!     .build();
//!
//! assert_eq!(pizza.size(), Size::Small);
//! assert!(calzone.sauce_inside());
//! ```

pub mod calzone;
pub mod ny_pizza;
pub mod order;

pub use calzone::{Calzone, CalzoneBuilder};
pub use ny_pizza::{NyPizza, NyPizzaBuilder, Size};
pub use order::PizzaOrder;

use crate::core::{ConstructionError, Rejected};
use serde::Serialize;
use std::collections::BTreeSet;
use strum::{Display, EnumIter, EnumString};

/// トッピングの種類
///
/// 宣言順が並び順になる。名前の解析は大文字小文字を区別しない。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Ham,
    Mushroom,
    Onion,
    Pepper,
    Sausage,
}

/// トッピングの集合（重複なし、宣言順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Toppings(BTreeSet<Topping>);

impl Toppings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, topping: Topping) -> bool {
        self.0.contains(&topping)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Topping> + '_ {
        self.0.iter().copied()
    }

    /// 追加済みなら何もしない
    fn insert(&mut self, topping: Topping) {
        self.0.insert(topping);
    }
}

impl FromIterator<Topping> for Toppings {
    fn from_iter<I: IntoIterator<Item = Topping>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Topping; N]> for Toppings {
    fn from(toppings: [Topping; N]) -> Self {
        toppings.into_iter().collect()
    }
}

/// 全ての種類のピザに共通する読み取り専用インターフェース
pub trait Pizza {
    fn toppings(&self) -> &Toppings;

    /// 種類名（JSON の `kind` と同じ）
    fn kind(&self) -> &'static str;
}

/// 各ビルダーが埋め込む共通の組み立て状態
#[derive(Debug, Clone, Default)]
pub struct PizzaBase {
    toppings: Toppings,
}

impl PizzaBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// 組み立て状態を閉じてトッピング集合を取り出す
    pub fn into_toppings(self) -> Toppings {
        self.toppings
    }
}

/// 階層的ビルダーの基底
///
/// 共通のセッターはここに一度だけ定義し、`Self` を返す。
/// 実装側は `base_mut` と `build` だけを書けばよい。
pub trait PizzaBuilder: Sized {
    /// このビルダーが生成する具象ピザ型
    type Output: Pizza;

    /// 共通の組み立て状態への可変参照を返す
    fn base_mut(&mut self) -> &mut PizzaBase;

    /// ビルダーを消費してピザを生成
    ///
    /// `self` を値で受け取るので、`build` 後のビルダーは再利用できない。
    /// 似たピザを複数作るときは `build` の前に `clone` する。
    ///
    /// ```compile_fail
    /// use construction_patterns::pizza::{NyPizza, PizzaBuilder, Size};
    ///
    /// let builder = NyPizza::builder(Size::Small);
    /// let first = builder.build();
    /// let second = builder.build();
    /// ```
    ///
    /// ```compile_fail
    /// use construction_patterns::pizza::{NyPizza, PizzaBuilder, Size, Topping};
    ///
    /// let builder = NyPizza::builder(Size::Small);
    /// let pizza = builder.build();
    /// let builder = builder.add_topping(Topping::Ham);
    /// ```
    ///
    /// 生成されたピザにはセッターがなく、フィールドも非公開。
    ///
    /// ```compile_fail
    /// use construction_patterns::pizza::{NyPizza, PizzaBuilder, Size};
    ///
    /// let mut pizza = NyPizza::builder(Size::Small).build();
    /// pizza.size = Size::Large;
    /// ```
    fn build(self) -> Self::Output;

    /// トッピングを追加（同じトッピングは一つにまとまる）
    fn add_topping(mut self, topping: Topping) -> Self {
        self.base_mut().toppings.insert(topping);
        self
    }

    fn add_toppings<I>(self, toppings: I) -> Self
    where
        I: IntoIterator<Item = Topping>,
    {
        toppings.into_iter().fold(self, Self::add_topping)
    }

    /// 名前からトッピングを追加（前後の空白は無視する）
    ///
    /// 未知の名前なら、受け取ったビルダーを変更せずに [`Rejected`] で返す。
    fn try_add_topping(self, name: &str) -> Result<Self, Rejected<Self>> {
        match name.trim().parse::<Topping>() {
            Ok(topping) => Ok(self.add_topping(topping)),
            Err(_) => {
                tracing::warn!(topping = name, "未知のトッピングを拒否");
                Err(Rejected::new(
                    self,
                    ConstructionError::invalid_argument("topping", name, "未知のトッピングです"),
                ))
            }
        }
    }
}

/// 種類を問わずピザを扱うためのタグ付き共用体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyPizza {
    Ny(NyPizza),
    Calzone(Calzone),
}

impl Pizza for AnyPizza {
    fn toppings(&self) -> &Toppings {
        match self {
            Self::Ny(pizza) => pizza.toppings(),
            Self::Calzone(pizza) => pizza.toppings(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Ny(pizza) => pizza.kind(),
            Self::Calzone(pizza) => pizza.kind(),
        }
    }
}

impl From<NyPizza> for AnyPizza {
    fn from(pizza: NyPizza) -> Self {
        Self::Ny(pizza)
    }
}

impl From<Calzone> for AnyPizza {
    fn from(pizza: Calzone) -> Self {
        Self::Calzone(pizza)
    }
}
