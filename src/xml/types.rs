//! XML type definitions for look-and-feel files.

use serde::Deserialize;

/// Root element of a look-and-feel file.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename = "Falagard")]
pub struct FalagardXml {
    #[serde(rename = "@version")]
    pub version: Option<String>,
    #[serde(rename = "WidgetLook", default)]
    pub looks: Vec<WidgetLookXml>,
}

/// One `<WidgetLook>`.
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetLookXml {
    #[serde(rename = "@name")]
    pub name: String,

    // Child elements collected via $value to keep declaration order
    #[serde(rename = "$value", default)]
    pub children: Vec<LookChildElement>,
}

/// Child elements that can appear inside a WidgetLook.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum LookChildElement {
    PropertyDefinition(PropertyDefinitionXml),
    Property(PropertyXml),
    NamedArea(NamedAreaXml),
    ImagerySection(ImagerySectionXml),
    Child(ChildXml),
    StateImagery(StateImageryXml),
}

#[derive(Debug, Deserialize, Clone)]
pub struct PropertyDefinitionXml {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@initialValue")]
    pub initial_value: Option<String>,
    #[serde(rename = "@redrawOnWrite")]
    pub redraw_on_write: Option<bool>,
    #[serde(rename = "@layoutOnWrite")]
    pub layout_on_write: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PropertyXml {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NamedAreaXml {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "Area")]
    pub area: AreaXml,
}

/// `<Area>`: four `<Dim>`s or one `<AreaProperty>`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AreaXml {
    #[serde(rename = "$value", default)]
    pub children: Vec<AreaChildElement>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum AreaChildElement {
    Dim(DimXml),
    AreaProperty(AreaPropertyXml),
}

#[derive(Debug, Deserialize, Clone)]
pub struct DimXml {
    #[serde(rename = "@type")]
    pub dim_type: String,
    #[serde(rename = "$value", default)]
    pub value: Vec<DimValueXml>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AreaPropertyXml {
    #[serde(rename = "@name")]
    pub name: String,
}

/// Dimension value elements.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum DimValueXml {
    AbsoluteDim(AbsoluteDimXml),
    UnifiedDim(UnifiedDimXml),
    PropertyDim(PropertyDimXml),
    OperatorDim(OperatorDimXml),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AbsoluteDimXml {
    #[serde(rename = "@value")]
    pub value: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UnifiedDimXml {
    #[serde(rename = "@scale")]
    pub scale: Option<f32>,
    #[serde(rename = "@offset")]
    pub offset: Option<f32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PropertyDimXml {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OperatorDimXml {
    #[serde(rename = "@op")]
    pub op: String,
    #[serde(rename = "$value", default)]
    pub operands: Vec<DimValueXml>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImagerySectionXml {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "Image", default)]
    pub images: Vec<ImageXml>,
}

/// `<Image>`: a draw operation with an optional inline area and conditions.
#[derive(Debug, Deserialize, Clone)]
pub struct ImageXml {
    #[serde(rename = "@image")]
    pub image: String,
    /// Named area reference.
    #[serde(rename = "@area")]
    pub area: Option<String>,
    #[serde(rename = "@colour")]
    pub colour: Option<String>,
    #[serde(rename = "$value", default)]
    pub children: Vec<ImageChildElement>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum ImageChildElement {
    Area(AreaXml),
    Condition(ConditionXml),
    AllOf(ConditionGroupXml),
    AnyOf(ConditionGroupXml),
    Not(ConditionGroupXml),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConditionXml {
    #[serde(rename = "@property")]
    pub property: String,
    #[serde(rename = "@value")]
    pub value: Option<String>,
    #[serde(rename = "@op")]
    pub op: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConditionGroupXml {
    #[serde(rename = "$value", default)]
    pub children: Vec<ConditionElementXml>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum ConditionElementXml {
    Condition(ConditionXml),
    AllOf(ConditionGroupXml),
    AnyOf(ConditionGroupXml),
    Not(ConditionGroupXml),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChildXml {
    #[serde(rename = "@type")]
    pub widget_type: String,
    #[serde(rename = "@nameSuffix")]
    pub name_suffix: String,
    #[serde(rename = "@look")]
    pub look: Option<String>,
    #[serde(rename = "$value", default)]
    pub children: Vec<ChildChildElement>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum ChildChildElement {
    Area(AreaXml),
    Property(PropertyXml),
}

#[derive(Debug, Deserialize, Clone)]
pub struct StateImageryXml {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@clipped")]
    pub clipped: Option<bool>,
    #[serde(rename = "Layer", default)]
    pub layers: Vec<LayerXml>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LayerXml {
    #[serde(rename = "@priority")]
    pub priority: Option<i32>,
    #[serde(rename = "$value", default)]
    pub entries: Vec<LayerEntryXml>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub enum LayerEntryXml {
    Image(ImageXml),
    Section(SectionXml),
}

/// `<Section>`: reference to an imagery section from a layer.
#[derive(Debug, Deserialize, Clone)]
pub struct SectionXml {
    #[serde(rename = "@section")]
    pub section: String,
    #[serde(rename = "@colour")]
    pub colour: Option<String>,
    #[serde(rename = "$value", default)]
    pub conditions: Vec<ConditionElementXml>,
}
