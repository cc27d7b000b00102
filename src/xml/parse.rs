//! XML parsing and conversion into widget looks.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::types::*;
use crate::error::{Error, ObjectKind, Result};
use crate::falagard::{
    AreaRef, ComponentArea, Condition, Dim, DimOp, Dimension, DimensionType, ImageryComponent, ImagerySection,
    LayerSpecification, LookSource, NamedArea, PropertyDefinition, SectionSpecification, StateImagery, WidgetComponent,
    WidgetLook,
};
use crate::render::Color;

/// File extensions picked up when loading a directory.
pub const LOOK_FILE_EXTENSIONS: &[&str] = &["looknfeel", "xml"];

/// Parse look-and-feel XML text.
pub fn parse_xml(xml: &str) -> Result<FalagardXml> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Parse a look-and-feel file from disk.
pub fn parse_xml_file(path: &Path) -> Result<FalagardXml> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse_xml(&contents)
}

/// Convert every `<WidgetLook>` of a parsed file.
pub fn convert_document(doc: &FalagardXml) -> Result<Vec<WidgetLook>> {
    doc.looks.iter().map(convert_look).collect()
}

/// Convert one `<WidgetLook>`, rejecting names defined twice within it.
pub fn convert_look(xml: &WidgetLookXml) -> Result<WidgetLook> {
    let mut look = WidgetLook::new(&xml.name);
    let mut areas = HashSet::new();
    let mut states = HashSet::new();
    let mut sections = HashSet::new();

    for child in &xml.children {
        look = match child {
            LookChildElement::PropertyDefinition(def) => look.with_property_definition(PropertyDefinition {
                name: def.name.clone(),
                initial_value: def.initial_value.clone().unwrap_or_default(),
                redraw_on_write: def.redraw_on_write.unwrap_or(false),
                layout_on_write: def.layout_on_write.unwrap_or(false),
            }),
            LookChildElement::Property(p) => look.with_property(&p.name, &p.value),
            LookChildElement::NamedArea(na) => {
                if !areas.insert(na.name.as_str()) {
                    return Err(Error::duplicate(ObjectKind::NamedArea, format!("{}/{}", xml.name, na.name)));
                }
                let area = convert_area(&na.area).map_err(|e| context(e, &xml.name, &na.name))?;
                look.with_named_area(NamedArea::new(&na.name, area))
            }
            LookChildElement::ImagerySection(s) => {
                if !sections.insert(s.name.as_str()) {
                    return Err(Error::duplicate(ObjectKind::ImagerySection, format!("{}/{}", xml.name, s.name)));
                }
                let mut section = ImagerySection::new(&s.name);
                for image in &s.images {
                    section = section.with_image(convert_image(image).map_err(|e| context(e, &xml.name, &s.name))?);
                }
                look.with_imagery_section(section)
            }
            LookChildElement::Child(c) => look.with_child(convert_child(c).map_err(|e| context(e, &xml.name, &c.name_suffix))?),
            LookChildElement::StateImagery(s) => {
                if !states.insert(s.name.as_str()) {
                    return Err(Error::duplicate(ObjectKind::StateImagery, format!("{}/{}", xml.name, s.name)));
                }
                look.with_state_imagery(convert_state(s).map_err(|e| context(e, &xml.name, &s.name))?)
            }
        };
    }

    Ok(look)
}

/// Prefix parse errors with the look and element they came from.
fn context(err: Error, look: &str, element: &str) -> Error {
    match err {
        Error::Parse(msg) => Error::Parse(format!("{look}/{element}: {msg}")),
        other => other,
    }
}

fn convert_state(xml: &StateImageryXml) -> Result<StateImagery> {
    let mut state = StateImagery::new(&xml.name).with_clipped(xml.clipped.unwrap_or(true));
    for layer_xml in &xml.layers {
        let mut layer = LayerSpecification::new(layer_xml.priority.unwrap_or(0));
        for entry in &layer_xml.entries {
            layer = match entry {
                LayerEntryXml::Image(image) => layer.with_image(convert_image(image)?),
                LayerEntryXml::Section(s) => layer.with_section(SectionSpecification {
                    section: s.section.clone(),
                    color: s.colour.as_deref().map(Color::from_argb_hex).transpose()?,
                    condition: convert_condition_list(&s.conditions)?,
                }),
            };
        }
        state = state.with_layer(layer);
    }
    Ok(state)
}

fn convert_image(xml: &ImageXml) -> Result<ImageryComponent> {
    let mut inline_area = None;
    let mut conditions = Vec::new();
    for child in &xml.children {
        match child {
            ImageChildElement::Area(area) => {
                if inline_area.replace(convert_area(area)?).is_some() {
                    return Err(Error::parse(format!("image {} has more than one Area", xml.image)));
                }
            }
            ImageChildElement::Condition(c) => conditions.push(convert_condition(c)?),
            ImageChildElement::AllOf(g) => conditions.push(Condition::AllOf(convert_group(g)?)),
            ImageChildElement::AnyOf(g) => conditions.push(Condition::AnyOf(convert_group(g)?)),
            ImageChildElement::Not(g) => conditions.push(Condition::negate(Condition::AllOf(convert_group(g)?))),
        }
    }

    let area = match (&xml.area, inline_area) {
        (Some(name), None) => AreaRef::Named(name.clone()),
        (None, Some(area)) => AreaRef::Inline(area),
        (Some(_), Some(_)) => {
            return Err(Error::parse(format!("image {} has both an area reference and an inline Area", xml.image)));
        }
        (None, None) => return Err(Error::parse(format!("image {} has no area", xml.image))),
    };

    let mut image = ImageryComponent::new(&xml.image, area);
    if let Some(colour) = &xml.colour {
        image = image.with_color(Color::from_argb_hex(colour)?);
    }
    image.condition = fold_conditions(conditions);
    Ok(image)
}

fn convert_child(xml: &ChildXml) -> Result<WidgetComponent> {
    let mut area = None;
    let mut properties = Vec::new();
    for child in &xml.children {
        match child {
            ChildChildElement::Area(a) => {
                if area.replace(convert_area(a)?).is_some() {
                    return Err(Error::parse("child has more than one Area"));
                }
            }
            ChildChildElement::Property(p) => properties.push((p.name.clone(), p.value.clone())),
        }
    }
    let area = area.ok_or_else(|| Error::parse("child has no Area"))?;

    let mut component = WidgetComponent::new(&xml.widget_type, &xml.name_suffix, area);
    if let Some(look) = &xml.look {
        component = component.with_look(look);
    }
    for (name, value) in properties {
        component = component.with_property(name, value);
    }
    Ok(component)
}

fn convert_area(xml: &AreaXml) -> Result<ComponentArea> {
    let mut left = None;
    let mut top = None;
    let mut right_or_width = None;
    let mut bottom_or_height = None;
    let mut property = None;

    for child in &xml.children {
        match child {
            AreaChildElement::AreaProperty(p) => property = Some(p.name.clone()),
            AreaChildElement::Dim(d) => {
                let kind = DimensionType::from_str(&d.dim_type)
                    .ok_or_else(|| Error::parse(format!("unknown Dim type '{}'", d.dim_type)))?;
                let [value] = d.value.as_slice() else {
                    return Err(Error::parse(format!("Dim {} needs exactly one value", d.dim_type)));
                };
                let dim = Dim::new(kind, convert_dimension(value)?);
                let slot = match kind {
                    DimensionType::LeftEdge | DimensionType::XPosition => &mut left,
                    DimensionType::TopEdge | DimensionType::YPosition => &mut top,
                    DimensionType::RightEdge | DimensionType::Width => &mut right_or_width,
                    DimensionType::BottomEdge | DimensionType::Height => &mut bottom_or_height,
                };
                if slot.replace(dim).is_some() {
                    return Err(Error::parse(format!("Area defines the {} axis edge twice", d.dim_type)));
                }
            }
        }
    }

    match (property, left, top, right_or_width, bottom_or_height) {
        (Some(name), None, None, None, None) => Ok(ComponentArea::from_property(name)),
        (None, Some(l), Some(t), Some(r), Some(b)) => Ok(ComponentArea::from_dims(l, t, r, b)),
        (Some(_), ..) => Err(Error::parse("Area mixes AreaProperty with Dim elements")),
        _ => Err(Error::parse("Area needs left, top, right/width and bottom/height Dims")),
    }
}

fn convert_dimension(xml: &DimValueXml) -> Result<Dimension> {
    Ok(match xml {
        DimValueXml::AbsoluteDim(d) => Dimension::absolute(d.value),
        DimValueXml::UnifiedDim(d) => Dimension::unified(d.scale.unwrap_or(0.0), d.offset.unwrap_or(0.0)),
        DimValueXml::PropertyDim(d) => Dimension::Property(d.name.clone()),
        DimValueXml::OperatorDim(d) => {
            let op = DimOp::from_str(&d.op).ok_or_else(|| Error::parse(format!("unknown OperatorDim op '{}'", d.op)))?;
            let [lhs, rhs] = d.operands.as_slice() else {
                return Err(Error::parse(format!("OperatorDim {} needs two operands", d.op)));
            };
            Dimension::operation(op, convert_dimension(lhs)?, convert_dimension(rhs)?)
        }
    })
}

fn convert_condition(xml: &ConditionXml) -> Result<Condition> {
    let property = xml.property.clone();
    match (xml.op.as_deref(), &xml.value) {
        (None, None) => Ok(Condition::IsTrue(property)),
        (None | Some("Equals"), Some(value)) => Ok(Condition::equals(property, value)),
        (Some("NotEquals"), Some(value)) => Ok(Condition::not_equals(property, value)),
        (Some(op), _) => Err(Error::parse(format!("condition on {property}: unsupported op '{op}' or missing value"))),
    }
}

fn convert_group(xml: &ConditionGroupXml) -> Result<Vec<Condition>> {
    xml.children.iter().map(convert_condition_element).collect()
}

fn convert_condition_element(xml: &ConditionElementXml) -> Result<Condition> {
    Ok(match xml {
        ConditionElementXml::Condition(c) => convert_condition(c)?,
        ConditionElementXml::AllOf(g) => Condition::AllOf(convert_group(g)?),
        ConditionElementXml::AnyOf(g) => Condition::AnyOf(convert_group(g)?),
        ConditionElementXml::Not(g) => Condition::negate(Condition::AllOf(convert_group(g)?)),
    })
}

fn convert_condition_list(xml: &[ConditionElementXml]) -> Result<Option<Condition>> {
    let conditions = xml.iter().map(convert_condition_element).collect::<Result<Vec<_>>>()?;
    Ok(fold_conditions(conditions))
}

/// Several conditions on one element must all hold.
fn fold_conditions(mut conditions: Vec<Condition>) -> Option<Condition> {
    match conditions.len() {
        0 => None,
        1 => conditions.pop(),
        _ => Some(Condition::AllOf(conditions)),
    }
}

/// Look-and-feel XML as a [`LookSource`]: inline text, one file, or a directory tree.
#[derive(Debug, Clone)]
pub enum XmlLookSource {
    Text(String),
    Path(PathBuf),
}

impl XmlLookSource {
    pub fn from_text(xml: impl Into<String>) -> Self {
        Self::Text(xml.into())
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }
}

/// Every look-and-feel file under `dir`, sorted for a stable load order.
pub fn look_files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| LOOK_FILE_EXTENSIONS.iter().any(|x| ext.eq_ignore_ascii_case(x)))
        })
        .collect();
    files.sort();
    files
}

impl LookSource for XmlLookSource {
    fn describe(&self) -> String {
        match self {
            Self::Text(_) => "inline XML".to_string(),
            Self::Path(p) => p.display().to_string(),
        }
    }

    fn widget_looks(&self) -> Result<Vec<WidgetLook>> {
        match self {
            Self::Text(xml) => convert_document(&parse_xml(xml)?),
            Self::Path(path) if path.is_dir() => {
                let mut looks = Vec::new();
                for file in look_files_in(path) {
                    tracing::debug!("reading look-and-feel file {}", file.display());
                    looks.extend(convert_document(&parse_xml_file(&file)?)?);
                }
                Ok(looks)
            }
            Self::Path(path) => convert_document(&parse_xml_file(path)?),
        }
    }
}
