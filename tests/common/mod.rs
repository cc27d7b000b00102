//! Shared test fixtures.

use falagard::WidgetLookManager;
use falagard::render::Rect;
use falagard::widget::{FrameWindow, Window, WindowRegistry};

#[allow(dead_code)]
pub const FRAME_LOOK: &str = "Sample/FrameWindow";
#[allow(dead_code)]
pub const LIST_LOOK: &str = "Sample/ListView";

#[allow(dead_code)]
/// Frame window and list view looks in look-and-feel XML.
pub const SAMPLE_LOOKNFEEL: &str = r#"
<Falagard version="7">
    <WidgetLook name="Sample/FrameWindow">
        <PropertyDefinition name="TitlebarEnabled" initialValue="true" redrawOnWrite="true"/>
        <PropertyDefinition name="CloseButtonOffset" initialValue="20" layoutOnWrite="true"/>
        <Property name="RollUpEnabled" value="true"/>
        <NamedArea name="Full">
            <Area>
                <Dim type="LeftEdge"><AbsoluteDim value="0"/></Dim>
                <Dim type="TopEdge"><AbsoluteDim value="0"/></Dim>
                <Dim type="RightEdge"><UnifiedDim scale="1"/></Dim>
                <Dim type="BottomEdge"><UnifiedDim scale="1"/></Dim>
            </Area>
        </NamedArea>
        <NamedArea name="ClientArea">
            <Area>
                <Dim type="LeftEdge"><AbsoluteDim value="4"/></Dim>
                <Dim type="TopEdge"><AbsoluteDim value="4"/></Dim>
                <Dim type="RightEdge"><UnifiedDim scale="1" offset="-4"/></Dim>
                <Dim type="BottomEdge"><UnifiedDim scale="1" offset="-4"/></Dim>
            </Area>
        </NamedArea>
        <NamedArea name="Titlebar">
            <Area>
                <Dim type="LeftEdge"><AbsoluteDim value="0"/></Dim>
                <Dim type="TopEdge"><AbsoluteDim value="0"/></Dim>
                <Dim type="Width"><UnifiedDim scale="1"/></Dim>
                <Dim type="Height"><AbsoluteDim value="20"/></Dim>
            </Area>
        </NamedArea>
        <ImagerySection name="Frame">
            <Image image="Frame/Border" area="Full"/>
        </ImagerySection>
        <Child type="Falagard/Titlebar" nameSuffix="__auto_titlebar__">
            <Area>
                <Dim type="LeftEdge"><AbsoluteDim value="0"/></Dim>
                <Dim type="TopEdge"><AbsoluteDim value="0"/></Dim>
                <Dim type="Width"><UnifiedDim scale="1"/></Dim>
                <Dim type="Height"><AbsoluteDim value="20"/></Dim>
            </Area>
            <Property name="Text" value="Caption"/>
        </Child>
        <Child type="Falagard/Button" nameSuffix="__auto_closebutton__" look="Sample/Button">
            <Area>
                <Dim type="LeftEdge">
                    <OperatorDim op="Subtract">
                        <UnifiedDim scale="1"/>
                        <PropertyDim name="CloseButtonOffset"/>
                    </OperatorDim>
                </Dim>
                <Dim type="TopEdge"><AbsoluteDim value="2"/></Dim>
                <Dim type="Width"><AbsoluteDim value="16"/></Dim>
                <Dim type="Height"><AbsoluteDim value="16"/></Dim>
            </Area>
        </Child>
        <StateImagery name="Active">
            <Layer priority="1">
                <Image image="Frame/ActiveTitle" area="Titlebar">
                    <Condition property="TitlebarEnabled"/>
                </Image>
                <Image image="Frame/Client" area="ClientArea"/>
            </Layer>
            <Layer>
                <Section section="Frame"/>
            </Layer>
        </StateImagery>
        <StateImagery name="Inactive">
            <Layer>
                <Section section="Frame" colour="FF808080"/>
                <Image image="Frame/InactiveTitle" area="Titlebar">
                    <Condition property="TitlebarEnabled"/>
                </Image>
            </Layer>
        </StateImagery>
        <StateImagery name="Disabled" clipped="false">
            <Layer>
                <Section section="Frame" colour="FF404040"/>
            </Layer>
        </StateImagery>
    </WidgetLook>
    <WidgetLook name="Sample/ListView">
        <PropertyDefinition name="SortMode" initialValue="None" redrawOnWrite="true"/>
        <NamedArea name="ItemRenderingArea">
            <Area>
                <Dim type="LeftEdge"><AbsoluteDim value="2"/></Dim>
                <Dim type="TopEdge"><AbsoluteDim value="2"/></Dim>
                <Dim type="RightEdge"><UnifiedDim scale="1" offset="-2"/></Dim>
                <Dim type="BottomEdge"><UnifiedDim scale="1" offset="-2"/></Dim>
            </Area>
        </NamedArea>
        <StateImagery name="Enabled">
            <Layer>
                <Image image="List/Back">
                    <Area>
                        <Dim type="LeftEdge"><AbsoluteDim value="0"/></Dim>
                        <Dim type="TopEdge"><AbsoluteDim value="0"/></Dim>
                        <Dim type="RightEdge"><UnifiedDim scale="1"/></Dim>
                        <Dim type="BottomEdge"><UnifiedDim scale="1"/></Dim>
                    </Area>
                </Image>
            </Layer>
        </StateImagery>
        <StateImagery name="Disabled"/>
    </WidgetLook>
</Falagard>
"#;

/// Registry holding the sample looks.
pub fn sample_looks() -> WidgetLookManager {
    let mut looks = WidgetLookManager::new();
    looks.parse_look_source(SAMPLE_LOOKNFEEL).unwrap();
    looks
}

/// An active root window plus a 200x100 frame window parented to it.
#[allow(dead_code)]
pub fn frame_setup() -> (WidgetLookManager, WindowRegistry, FrameWindow) {
    let looks = sample_looks();
    let mut windows = WindowRegistry::new();
    let mut root = Window::new("Generic", "Root").with_area(Rect::new(0.0, 0.0, 800.0, 600.0));
    root.active = true;
    windows.register(root).unwrap();

    let mut frame = FrameWindow::new("Frame", FRAME_LOOK);
    frame.window_mut().set_area(Rect::new(0.0, 0.0, 200.0, 100.0));
    frame.window_mut().parent = Some("Root".into());
    frame.initialise_components(&looks, &mut windows).unwrap();
    (looks, windows, frame)
}
