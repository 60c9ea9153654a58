pub mod nivel_jerarquico;
