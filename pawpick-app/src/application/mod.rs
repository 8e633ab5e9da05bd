mod recommend_product;

pub use recommend_product::RecommendProduct;
