// 階層的ビルダーの統合テスト
use construction_patterns::{
    pizza::{
        AnyPizza, Calzone, CalzoneBuilder, NyPizza, NyPizzaBuilder, Pizza, PizzaBase,
        PizzaBuilder, Size, Topping, Toppings,
    },
    ConstructionError,
};

#[test]
fn test_small_ny_pizza_reports_size_and_toppings() {
    let pizza: NyPizza = NyPizza::builder(Size::Small)
        .add_topping(Topping::Sausage)
        .add_topping(Topping::Onion)
        .build();

    assert_eq!(pizza.size(), Size::Small);
    assert_eq!(pizza.toppings(), &Toppings::from([Topping::Onion, Topping::Sausage]));
}

#[test]
fn test_calzone_sauce_inside_explicit_and_default() {
    let with_sauce: Calzone = Calzone::builder()
        .add_topping(Topping::Ham)
        .with_sauce_inside()
        .build();
    assert!(with_sauce.sauce_inside());
    assert_eq!(with_sauce.toppings(), &Toppings::from([Topping::Ham]));

    let without_sauce = Calzone::builder().add_topping(Topping::Ham).build();
    assert!(!without_sauce.sauce_inside());
}

#[test]
fn test_adding_same_topping_twice_keeps_one() {
    let pizza = Calzone::builder()
        .add_topping(Topping::Sausage)
        .add_topping(Topping::Sausage)
        .build();

    assert_eq!(pizza.toppings().iter().collect::<Vec<_>>(), [Topping::Sausage]);
}

#[test]
fn test_rejected_input_leaves_builder_usable() {
    let rejected = NyPizzaBuilder::new(Size::Large)
        .add_topping(Topping::Mushroom)
        .try_add_topping("pineapple")
        .unwrap_err();

    let (builder, error) = rejected.into_parts();
    assert!(matches!(error, ConstructionError::InvalidArgument { .. }));

    let pizza = builder.build();
    assert_eq!(pizza.toppings(), &Toppings::from([Topping::Mushroom]));
}

// 基底のトレイトだけで書いた処理が、どの具象ビルダーにも使える
fn margherita_style<B: PizzaBuilder>(builder: B) -> B::Output {
    builder
        .add_toppings([Topping::Mushroom, Topping::Pepper])
        .build()
}

#[test]
fn test_generic_build_returns_concrete_type() {
    let ny: NyPizza = margherita_style(NyPizza::builder(Size::Medium));
    let calzone: Calzone = margherita_style(CalzoneBuilder::new().with_sauce_inside());

    assert_eq!(ny.size(), Size::Medium);
    assert!(calzone.sauce_inside());
    assert_eq!(ny.toppings(), calzone.toppings());
}

// クレート外でも階層を拡張できる
#[derive(Debug)]
struct Flatbread {
    toppings: Toppings,
    crispy: bool,
}

impl Pizza for Flatbread {
    fn toppings(&self) -> &Toppings {
        &self.toppings
    }

    fn kind(&self) -> &'static str {
        "flatbread"
    }
}

struct FlatbreadBuilder {
    base: PizzaBase,
    crispy: bool,
}

impl FlatbreadBuilder {
    fn new(crispy: bool) -> Self {
        Self {
            base: PizzaBase::new(),
            crispy,
        }
    }
}

impl PizzaBuilder for FlatbreadBuilder {
    type Output = Flatbread;

    fn base_mut(&mut self) -> &mut PizzaBase {
        &mut self.base
    }

    fn build(self) -> Flatbread {
        Flatbread {
            toppings: self.base.into_toppings(),
            crispy: self.crispy,
        }
    }
}

#[test]
fn test_external_subtype_reuses_shared_setters() {
    let flatbread = FlatbreadBuilder::new(true)
        .add_topping(Topping::Onion)
        .try_add_topping("ham")
        .unwrap()
        .build();

    assert!(flatbread.crispy);
    assert_eq!(flatbread.kind(), "flatbread");
    assert_eq!(flatbread.toppings(), &Toppings::from([Topping::Ham, Topping::Onion]));
}

#[test]
fn test_any_pizza_handles_mixed_kinds() {
    let pizzas: Vec<AnyPizza> = vec![
        NyPizza::builder(Size::Small).add_topping(Topping::Ham).build().into(),
        Calzone::builder().add_topping(Topping::Ham).build().into(),
    ];

    let kinds: Vec<&str> = pizzas.iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, ["ny", "calzone"]);
    assert!(pizzas.iter().all(|p| p.toppings().contains(Topping::Ham)));
}
